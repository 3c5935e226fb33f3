pub mod alerts;
pub mod health;
pub mod medications;
pub mod prescription;
pub mod profiles;
pub mod reminders;
pub mod terms;
pub mod users;
