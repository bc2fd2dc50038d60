pub mod submission;

pub use submission::{ContactForm, NewSubmission, Submission};
