pub mod field;
pub mod options;
pub mod response;
pub mod section;

pub use field::{FIELDS, FieldKind, FieldSpec, field, fields_in, fields_under};
pub use response::{
    BarrierRatings, EnvironmentalPractices, GovernancePractices, SectionA, SectionB, SectionC,
    SectionD, SectionE, SectionF, SectionG, SocialPractices, SurveyResponse,
};
pub use section::Section;
