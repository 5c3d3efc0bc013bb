pub mod corrector;
pub mod verifier;

pub use corrector::ICorrector;
pub use verifier::IVerifier;
