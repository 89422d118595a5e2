// Lesson-plan domain: vocabularies, the request record, the form draft that
// produces it, and the generated content.

pub mod content;
pub mod form;
pub mod request;
pub mod validation;
pub mod vocab;

pub use content::LessonPlanContent;
pub use form::FormState;
pub use request::LessonPlanRequest;
