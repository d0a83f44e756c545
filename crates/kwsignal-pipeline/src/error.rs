use kwsignal_naver::NaverError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] NaverError),

    #[error("keyword tool response for \"{seed}\" has no keywordList")]
    MissingKeywordList { seed: String },

    #[error("unparseable monthly volume {raw:?} for keyword \"{keyword}\"")]
    InvalidVolume { keyword: String, raw: String },
}
