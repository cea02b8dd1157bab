//! Bundled food-domain grammar and vocabulary.
//!
//! Notation reminders for grammar authors:
//! - `eps_*` is generated for every terminal: the terminal or `empty_*`
//! - `empty_*` marks a missing token of that type
//! - `*_single` is a rule without coordination; the coordination is generated
//! - `*_req` requires its argument to be filled before use in a sentence
//! - `prep_X_Y` generates `empty_prep_X_Y` and `eps_prep_X_Y`

/// Meal descriptions: soups, meat products, side dishes and vegetables.
pub const DEFAULT_GRAMMAR: &str = r#"
// start symbol alternatives
sentence: t_zelenina
sentence: t_masoprodukt
sentence: t_priloha
// sentence: t_testoviny
sentence: t_polevka

t_priloha: (eps_zprac PRILOHA)
t_zelenina: (eps_zprac ZELENINA)
// t_omacka: ((t_zeleninovy|t_spec) OMACKA)
t_masoprodukt: (eps_zprac eps_maso (MASOPRODUKT|MASODIL))
t_masoprodukt: (eps_zprac eps_maso (MASOPRODUKT|MASODIL) ((PREP_S|","|COORD_A) (t_zelenina|t_priloha))*)
t_testoviny: (TESTOVINY)
t_polevka: (((eps_zeleninovy|eps_maso) POLEVKA) ((PREP_S|","|COORD_A) (t_zelenina|t_priloha|t_testoviny))*)
"#;

/// Vocabulary covering every terminal of [`DEFAULT_GRAMMAR`].
pub const DEFAULT_VOCABULARY: &str = "\
#zprac:pečený
#zprac:vařený
#zprac:dušený
#maso:kuřecí
#maso:vepřový
#maso:hovězí
#zeleninovy:zeleninový
#zeleninovy:rajčatový
#masoprodukt:řízek
#masoprodukt:guláš
#masodil:stehno
#masodil:prso
#priloha:knedlík
#priloha:rýže
#priloha:brambor
#zelenina:mrkev
#zelenina:zelí
#zelenina:hrášek
#testoviny:nudle
#testoviny:špagety
#polevka:polévka
#polevka:vývar
#prep_s:s
#coord_a:a
#floskule:prostě
#measure:malý
#measure:velký
";
