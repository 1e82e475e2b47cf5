pub mod new;
pub mod verify;
