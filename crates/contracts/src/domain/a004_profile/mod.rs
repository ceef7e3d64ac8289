//! Profile page: independently editable sections.
//!
//! - editor.rs: view/edit/save state machine around any section
//! - sections.rs: section records and their payload shapes
//! - schedule.rs: weekly availability grid
//! - endpoints.rs: which REST resource each section is saved to

pub mod editor;
pub mod endpoints;
pub mod schedule;
pub mod sections;

pub use editor::{EditPhase, SectionEditor, SectionError};
pub use endpoints::{section_endpoint, user_endpoint};
pub use schedule::{Day, TimeSlot, WeeklySchedule};
pub use sections::{
    AboutSection, AvailabilitySection, BasicInfoSection, ContactSection, FeesSection,
    ProfileData, ProfileSection, SectionKind, ServicesSection,
};
