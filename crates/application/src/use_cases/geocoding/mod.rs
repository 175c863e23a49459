mod invalidate_location;
mod locate_description;
mod resolve_location;

pub use invalidate_location::InvalidateLocationUseCase;
pub use locate_description::{LocateDescriptionUseCase, Located};
pub use resolve_location::{Resolution, ResolveLocationUseCase};
