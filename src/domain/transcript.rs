/// Output of the transcription stage. Consumed only by translation; never
/// outlives the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub language: Option<String>,
    pub confidence: Option<f32>,
}

impl Transcript {
    pub fn new(text: String, language: Option<String>, confidence: Option<f32>) -> Self {
        Self {
            text,
            language,
            confidence,
        }
    }
}
