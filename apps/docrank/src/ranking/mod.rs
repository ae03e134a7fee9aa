// Relevance scoring: TF-IDF vector space and top-N selection.

pub mod ranker;
pub mod stop_words;
pub mod tfidf;
