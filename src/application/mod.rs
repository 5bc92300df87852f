pub mod use_cases;

pub use use_cases::section_export::SectionExportUseCase;
