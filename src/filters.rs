pub mod morphology;
pub mod profanity;
pub mod validator;
