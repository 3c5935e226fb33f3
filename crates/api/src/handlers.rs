pub mod alerts;
pub mod medications;
pub mod prescription;
pub mod profiles;
pub mod reminders;
pub mod terms;
pub mod users;
