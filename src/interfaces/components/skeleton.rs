use crate::domain::section::{ComponentStatus, SectionKind, SectionSkeleton};

/// Placeholder for a section whose data cannot be shown yet
pub fn section_skeleton(kind: SectionKind, status: &ComponentStatus) -> SectionSkeleton {
    SectionSkeleton {
        title: kind.title().to_string(),
        description: kind.description().to_string(),
        icon: kind.icon(),
        status: status.status,
        error_message: status.error_message().map(str::to_string),
    }
}
