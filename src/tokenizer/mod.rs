mod tokenizer;

pub use self::tokenizer::Tokenizer;
