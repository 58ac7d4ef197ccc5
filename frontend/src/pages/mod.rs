pub mod dashboard;
pub mod landing;
