pub mod dialogs;
pub mod home;
pub mod loading;
pub mod question;
pub mod report;
