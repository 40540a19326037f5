//! Shared logic for providers speaking the OpenAI transcription API format.

mod openai_compatible;

pub(crate) use openai_compatible::openai_compatible_transcribe;
