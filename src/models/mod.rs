pub mod feedback;
pub mod meal;
pub mod meal_mode;

pub use feedback::FeedbackRecord;
pub use meal::{MealRecord, NewMeal};
pub use meal_mode::MealMode;
