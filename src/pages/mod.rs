pub mod about;
pub mod collections;
pub mod gallery;
pub mod new_arrivals;
pub mod not_found;
pub mod qr_landing;

pub use about::AboutPage;
pub use collections::CollectionsPage;
pub use gallery::GalleryPage;
pub use new_arrivals::NewArrivalsPage;
pub use not_found::NotFoundPage;
pub use qr_landing::QrLandingPage;
