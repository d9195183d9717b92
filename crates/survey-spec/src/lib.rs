#![allow(missing_docs)]

pub mod defaults;
pub mod records;
pub mod report;
pub mod scale;
pub mod schema;
pub mod select;
pub mod spec;
pub mod validate;

pub use defaults::default_response;
pub use records::{
    Location, LocationPayload, Product, ProductPayload, RecordError, product_image_path,
    public_image_url, sort_newest_first, validate_location, validate_product,
};
pub use report::{
    NO_RECOMMENDATIONS, Report, ReportBlock, ReportError, ReportRenderer, ReportStamp,
    build_report, render_html, render_text,
};
pub use scale::{
    AgreementLevel, BarrierSignificance, FamiliarityLevel, ImplementationExtent, Scale, ScaleKind,
};
pub use schema::response_schema;
pub use select::{MultiSelectField, toggle};
pub use spec::{FIELDS, FieldKind, FieldSpec, Section, SurveyResponse};
pub use validate::{
    ErrorCode, ValidationError, ValidationResult, parse_response, validate, validate_value,
};
