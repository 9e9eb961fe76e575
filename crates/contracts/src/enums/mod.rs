pub mod meal_period;
