//! Writes parse trees to disk.

use std::fs;
use std::path::{Path, PathBuf};

use semgram_foundation::Result;
use tracing::debug;

use crate::tree::ParseTree;

/// Files written for one successful combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFiles {
    /// Indented text of every tree.
    pub pretty: PathBuf,
    /// Graphviz diagram of the first tree.
    pub diagram: PathBuf,
}

/// Writes `sentence-NNN-VV.pretty` and `sentence-NNN-VV.dot` files.
#[derive(Clone, Debug)]
pub struct TreeExporter {
    directory: PathBuf,
}

impl TreeExporter {
    /// Creates an exporter writing into `directory`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn create(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;
        Ok(Self { directory })
    }

    /// The target directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File name stem for a sentence and variant.
    #[must_use]
    pub fn file_stem(sentence: usize, variant: usize) -> String {
        format!("sentence-{sentence:03}-{variant:02}")
    }

    /// Writes the trees of one combination.
    ///
    /// The label names the diagram, usually the sentence text and its
    /// readings.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file cannot be written.
    pub fn export(
        &self,
        sentence: usize,
        variant: usize,
        trees: &[ParseTree],
        label: &str,
    ) -> Result<ExportedFiles> {
        let stem = Self::file_stem(sentence, variant);
        let pretty = self.directory.join(format!("{stem}.pretty"));
        let diagram = self.directory.join(format!("{stem}.dot"));

        let text: Vec<String> = trees.iter().map(ParseTree::pretty).collect();
        fs::write(&pretty, text.join("\n"))?;
        if let Some(first) = trees.first() {
            fs::write(&diagram, first.to_dot(label))?;
        }

        debug!(path = %pretty.display(), trees = trees.len(), "exported parse trees");
        Ok(ExportedFiles { pretty, diagram })
    }
}
