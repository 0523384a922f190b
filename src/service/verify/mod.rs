//! Session, installation, and admin-permission verification

pub mod guild;
pub mod permission;
pub mod user;

pub use guild::GuildVerificationService;
pub use permission::PermissionService;
pub use user::UserVerificationService;

#[cfg(test)]
mod test;
