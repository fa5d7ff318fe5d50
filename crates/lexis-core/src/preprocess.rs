use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Normalize one line of input before lookup
    fn process(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }

        // NFKC folds full-width forms and ligatures
        text.nfkc()
            .filter(|c| !matches!(c, '\n' | '\r'))
            .collect::<String>()
            .trim()
            .to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
