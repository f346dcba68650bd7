use super::value_objects::{PlanRequest, SwapRequest};

pub const SCAN_INSTRUCTION: &str = "List the food items and raw ingredients you see in this fridge/pantry image. Return only a comma-separated list of names.";

fn pantry_list(pantry: &[String]) -> String {
    if pantry.is_empty() {
        "None".to_string()
    } else {
        pantry.join(", ")
    }
}

pub fn build_plan_prompt(request: &PlanRequest) -> String {
    let days: Vec<&str> = request
        .daily_budgets
        .iter()
        .map(|(day, _)| day.name())
        .collect();
    let budgets: Vec<String> = request
        .daily_budgets
        .iter()
        .map(|(day, minutes)| format!("{day}: {minutes} minutes"))
        .collect();

    format!(
        "Create a dinner meal plan for one week ({days}).\n\
         User diet: {diet}.\n\
         Maximum prep time per day: {budgets}.\n\
         Pantry items available: {pantry}.\n\
         Prioritize using pantry items.\n\
         Return a JSON array of exactly 7 objects (one for each day, in order from Monday to Sunday).",
        days = days.join(", "),
        diet = request.diet,
        budgets = budgets.join("; "),
        pantry = pantry_list(&request.pantry),
    )
}

pub fn build_swap_prompt(request: &SwapRequest) -> String {
    format!(
        "Suggest 3-5 alternative dinner meals for someone who doesn't want \"{meal}\".\n\
         Diet: {diet}. Max time: {minutes} mins.\n\
         Pantry: {pantry}.\n\
         Return as JSON array with properties: name, time, isPantryFriendly.",
        meal = request.meal_name,
        diet = request.diet,
        minutes = request.max_minutes,
        pantry = pantry_list(&request.pantry),
    )
}
