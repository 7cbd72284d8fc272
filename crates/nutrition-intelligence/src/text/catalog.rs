// ABOUTME: Built-in English templates for every narrative key emitted by the analytics engines
// ABOUTME: Used directly or as the fallback behind an injected translator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition DNA Contributors

use super::Translator;

/// English template catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl Translator for BuiltinCatalog {
    fn translate(&self, key: &str) -> Option<String> {
        english(key).map(str::to_owned)
    }
}

fn english(key: &str) -> Option<&'static str> {
    archetype(key)
        .or_else(|| labels(key))
        .or_else(|| analysis(key))
        .or_else(|| prediction(key))
        .or_else(|| insight(key))
        .or_else(|| weekly(key))
        .or_else(|| meal(key))
        .or_else(|| plan(key))
        .or_else(|| visualization(key))
}

fn archetype(key: &str) -> Option<&'static str> {
    let text = match key {
        "archetype.EARLY_BIRD_PLANNER.name" => "Early Bird Planner",
        "archetype.LATE_STARTER_IMPULSIVE.name" => "Late Starter",
        "archetype.STRUCTURED_BALANCED.name" => "Structured & Balanced",
        "archetype.STRESS_DRIVEN.name" => "Stress-Driven Eater",
        "archetype.SOCIAL_EATER.name" => "Social Eater",
        "archetype.INTUITIVE_GRAZER.name" => "Intuitive Grazer",
        "archetype.BUSY_PROFESSIONAL.name" => "Busy Professional",
        "archetype.WEEKEND_WARRIOR.name" => "Weekend Warrior",
        "archetype.EARLY_BIRD_PLANNER.description" => {
            "You start the day early and keep your meals on a steady schedule."
        }
        "archetype.LATE_STARTER_IMPULSIVE.description" => {
            "Mornings are quiet for you; most of your eating happens later and on impulse."
        }
        "archetype.STRUCTURED_BALANCED.description" => {
            "Your meals are regular and your intake stays even across the week."
        }
        "archetype.STRESS_DRIVEN.description" => {
            "Stress shapes when and how much you eat, often late in the day."
        }
        "archetype.SOCIAL_EATER.description" => {
            "Company and social occasions have a strong pull on your eating."
        }
        "archetype.INTUITIVE_GRAZER.description" => {
            "You eat by feel, without one dominant pattern."
        }
        "archetype.BUSY_PROFESSIONAL.description" => {
            "Your schedule drives your meals, so timing varies from day to day."
        }
        "archetype.WEEKEND_WARRIOR.description" => {
            "Weekends look very different from weekdays in how much you eat."
        }
        _ => return None,
    };
    Some(text)
}

fn labels(key: &str) -> Option<&'static str> {
    let text = match key {
        "day.monday" => "Monday",
        "day.tuesday" => "Tuesday",
        "day.wednesday" => "Wednesday",
        "day.thursday" => "Thursday",
        "day.friday" => "Friday",
        "day.saturday" => "Saturday",
        "day.sunday" => "Sunday",
        "period.early_morning" => "early morning",
        "period.morning" => "morning",
        "period.afternoon" => "afternoon",
        "period.evening" => "evening",
        "period.late_night" => "late night",
        "area.protein_intake" => "Protein intake",
        "area.fiber_intake" => "Fiber intake",
        "area.meal_timing" => "Meal timing",
        "area.weekend_consistency" => "Weekend consistency",
        "shopping.category.proteins" => "Proteins",
        "shopping.category.vegetables" => "Vegetables",
        "shopping.category.fruits" => "Fruits",
        "shopping.category.grains" => "Grains",
        "shopping.category.dairy" => "Dairy",
        "shopping.category.seasonings" => "Seasonings",
        "shopping.category.other" => "Other",
        _ => return None,
    };
    Some(text)
}

fn analysis(key: &str) -> Option<&'static str> {
    let text = match key {
        "temporal.early_breakfast" => "You have breakfast early, which supports a steady metabolism.",
        "temporal.late_breakfast" => "Your breakfast comes late; an earlier start could steady your energy.",
        "temporal.stable_schedule" => "Your meal times are very consistent.",
        "temporal.chaotic_schedule" => "Your meal times vary a lot from day to day.",
        "temporal.weekend_shift" => "Your weekend meals shift by about {hours} hours.",
        "temporal.late_eating" => "You often eat late in the evening.",
        "temporal.day.monday_reset" => {
            "{day}: bring breakfast back to {time} after the weekend shift."
        }
        "temporal.day.monday" => "{day}: start the week with breakfast around {time}.",
        "temporal.day.friday" => "{day}: plan the evening meal ahead so the week ends well.",
        "temporal.day.weekend_shifted" => {
            "{day}: your routine shifts on weekends; keep breakfast within reach of {time}."
        }
        "temporal.day.weekend" => "{day}: enjoy the day while keeping regular meals.",
        "temporal.day.midweek_steady" => "{day}: your steady routine works; keep breakfast at {time}.",
        "temporal.day.midweek" => "{day}: try to keep meals at the same times as yesterday.",
        "psych.early_bird" => "You plan ahead and eat early, a solid base for any goal.",
        "psych.late_starter" => "Late starts lead to impulsive choices; a light planned breakfast helps.",
        "psych.stress_driven" => "Stress affects your eating; quick calming routines can replace snacks.",
        "psych.social_eater" => "Social meals shape your intake; decide your order before you arrive.",
        "psych.weekend_warrior" => "Your weekends differ from weekdays; small weekend anchors help.",
        "psych.weekend_indulgence" => "Weekend intake is noticeably higher than weekday intake.",
        "psych.work_snacking" => "Work stress often leads to snacking.",
        "psych.low_planning" => "Meals are rarely planned; a simple weekly plan would help.",
        "dna.summary.archetype" => "Eating type: {archetype}",
        "dna.summary.confidence" => "Profile confidence: {value}",
        "dna.summary.diversity" => "Diversity: {value}",
        "dna.summary.consistency" => "Consistency: {value}",
        "dna.summary.goal_alignment" => "Goal alignment: {value}",
        "dna.summary.main_trigger" => "Main trigger: {response} when {trigger}",
        "dna.summary.growth_zone" => "Growth zone: {area}",
        "dna.summary.needs_more_data" => "Log a few more meals to sharpen your profile.",
        "context.influence.weather" => "Weather changes your intake by up to {percent}",
        "context.influence.time_preference" => "Time of day strongly shapes your intake",
        "context.influence.social_context" => "Social setting strongly shapes your intake",
        "context.influence.location" => "Where you eat strongly shapes your intake",
        "context.rec.weather" => "Plan warm, filling meals for days when the weather pulls you to comfort food.",
        "context.rec.time_preference" => "Put your largest meal in the part of the day you are hungriest.",
        "context.rec.social_context" => "Before social meals, decide on a balanced choice in advance.",
        "context.rec.location" => "Keep healthy options where you eat most often.",
        "context.rec.cold_weather" => "Cold or rainy today: a warm soup or stew will satisfy the craving.",
        "context.rec.hot_weather" => "Hot today: favor light meals and plenty of water.",
        "context.rec.restaurant" => "Eating out: look at the menu ahead and pick a protein-rich dish.",
        "context.rec.work" => "Work day: pack a snack so you are not relying on vending machines.",
        "context.rec.late_hour" => "It is late: keep the next meal light.",
        "context.rec.high_sensitivity" => "Your eating reacts strongly to context; plan around busy days.",
        "context.rec.low_sensitivity" => "Your eating is stable across situations; keep your routine.",
        "context.insight.weather" => {
            "You eat about {percent} more in {high} weather than in {low} weather."
        }
        "context.insight.active_period" => "Your most active eating time is the {period}.",
        "context.insight.social_bucket" => "Meals in a {context} setting are noticeably larger.",
        "context.insight.high_sensitivity" => "Your eating is highly sensitive to context.",
        "context.insight.low_sensitivity" => "Your eating barely changes with context.",
        "context.insight.sensitive_archetype" => {
            "Your eating type is especially responsive to situations and mood."
        }
        _ => return None,
    };
    Some(text)
}

fn prediction(key: &str) -> Option<&'static str> {
    let text = match key {
        "predict.action.late_night_snacking" => "Have a protein-rich dinner so late snacks are less tempting.",
        "predict.action.breakfast_skip" => "Prepare a quick breakfast the night before.",
        "predict.action.weekend_routine_disruption" => "Keep at least one meal at its weekday time.",
        "predict.action.monday_adjustment_difficulty" => "Plan Monday's meals on Sunday evening.",
        "predict.action.stress_induced_eating" => "Keep a calming, healthy snack within reach.",
        "predict.action.comfort_food_craving" => "Choose a warm, satisfying meal instead of sweets.",
        "predict.action.weekend_indulgence" => "Enjoy one planned treat and keep the rest balanced.",
        "predict.action.friday_reward_eating" => "Pick a non-food reward for finishing the week.",
        "predict.action.social_dining_excess" => "Start social meals with vegetables and water.",
        "predict.action.meal_skipping" => "Set a reminder for lunch.",
        "predict.action.impulse_food_purchase" => "Shop with a list and after eating.",
        "predict.action.stress_trigger_activation" => "Take a short walk when stress builds.",
        "predict.action.evening_trigger" => "Plan a light evening snack in advance.",
        "predict.action.same_day_high_intake" => "Split today's meals into smaller portions.",
        "predict.action.late_eating_trend_continuation" => "Move dinner a little earlier tonight.",
        "predict.action.weather_comfort_eating" => "Have a warm soup ready for the weather.",
        "predict.action.high_stress_eating" => "Prepare healthy snacks for a stressful day.",
        "predict.action.social_eating_excess" => "Decide on your order before the social meal.",
        "predict.action.travel_disruption" => "Pack snacks for the journey.",
        "predict.action.monday_trigger" => "Mondays bring {response}; plan a satisfying breakfast.",
        "predict.action.friday_trigger" => "Fridays bring {response}; plan your evening meal.",
        "predict.action.same_day_late_eating" => "You usually eat around {hour}:00 on this day; plan an earlier dinner.",
        "predict.tip.stress_driven" => "Keep stress-relief routines handy for busy days.",
        "predict.tip.social_eater" => "Check restaurant menus before social meals.",
        "predict.tip.weekend_warrior" => "Anchor weekends with one regular meal time.",
        "predict.tip.easy_win" => "Easy win: work on {area}.",
        "goal.factor.stable_schedule" => "Stable meal schedule",
        "goal.factor.frequent_late_eating" => "Frequent late eating",
        "goal.factor.weekend_deviation" => "Large weekend deviation",
        "goal.factor.morning_appetite" => "Healthy morning appetite",
        "goal.factor.high_consistency" => "High consistency",
        "goal.factor.excellent_consistency" => "Excellent consistency",
        "goal.factor.unstable_schedule" => "Unstable schedule",
        "goal.factor.strong_patterns" => "{count} strong success patterns",
        "goal.factor.strong_triggers" => "{count} strong eating triggers",
        _ => return None,
    };
    Some(text)
}

fn insight(key: &str) -> Option<&'static str> {
    let text = match key {
        "insight.archetype.EARLY_BIRD_PLANNER.monday" => "Use your morning energy to prep meals for the week.",
        "insight.archetype.EARLY_BIRD_PLANNER.friday" => "Plan the weekend menu today while you have momentum.",
        "insight.archetype.EARLY_BIRD_PLANNER.sunday" => "Sunday is ideal for batch cooking.",
        "insight.archetype.LATE_STARTER_IMPULSIVE.monday" => "Have a ready-made breakfast for the first workday.",
        "insight.archetype.LATE_STARTER_IMPULSIVE.thursday" => "Midweek fatigue invites impulse buys; keep snacks planned.",
        "insight.archetype.LATE_STARTER_IMPULSIVE.saturday" => "A late brunch counts as breakfast and lunch.",
        "insight.archetype.STRESS_DRIVEN.monday" => "Mondays can be stressful; keep calming snacks nearby.",
        "insight.archetype.STRESS_DRIVEN.wednesday" => "Midweek pressure peaks; schedule a proper lunch break.",
        "insight.archetype.STRESS_DRIVEN.friday" => "Unwind without food first when the week ends.",
        "insight.archetype.SOCIAL_EATER.friday" => "Friday plans ahead: check the menu before you go.",
        "insight.archetype.SOCIAL_EATER.saturday" => "Social Saturday: balance a big meal with a light one.",
        "insight.archetype.SOCIAL_EATER.sunday" => "Family meals: fill half the plate with vegetables.",
        "insight.archetype.WEEKEND_WARRIOR.monday" => "Back to routine: a regular breakfast resets the week.",
        "insight.archetype.WEEKEND_WARRIOR.friday" => "Set a simple plan for the weekend tonight.",
        "insight.archetype.WEEKEND_WARRIOR.saturday" => "Keep at least one weekend meal at its usual time.",
        "insight.temporal.weekend_shift" => "Your weekend routine shifts by {hours} hours; ease back gently.",
        "insight.temporal.monday_recovery" => "Aim for breakfast around {time} to reset after the weekend.",
        "insight.temporal.late_weekend" => "Late weekend evenings are common for you; plan a light dinner.",
        "insight.temporal.week_start_routine" => "A consistent start to the week sets your routine.",
        "insight.trigger.monday" => "Mondays tend to bring {response}.",
        "insight.trigger.friday" => "Fridays tend to bring {response}.",
        "insight.trigger.stress" => "Midweek stress tends to bring {response}.",
        "insight.trigger.evening" => "Around {time} you tend toward {response}.",
        "insight.recent.sparse_data" => "Only a few recent meals logged; keep logging for sharper insights.",
        "insight.recent.later_than_usual" => "You have been eating later than usual lately.",
        "insight.recent.low_calories" => "Recent meals were small; make sure you are eating enough.",
        "insight.recent.large_portions" => "Recent meals were large; watch portion sizes.",
        "insight.energy.low_morning_appetite" => "Morning appetite is low; a light breakfast around {time} is enough.",
        "insight.energy.evening_comfort" => "Evenings bring comfort cravings; plan a satisfying dinner.",
        "insight.energy.weekend_brunch" => "A brunch around {time} suits your weekend rhythm.",
        _ => return None,
    };
    Some(text)
}

fn weekly(key: &str) -> Option<&'static str> {
    let text = match key {
        "weekly.pattern.weekend_differs" => "Weekends differ noticeably from weekdays.",
        "weekly.pattern.stable" => "Your eating schedule is stable.",
        "weekly.pattern.chaotic" => "Your eating schedule is irregular.",
        "weekly.pattern.evening_comfort" => "Comfort eating shows up in the evenings.",
        "weekly.pattern.strong_triggers" => "{count} strong eating triggers are active.",
        "goal.micro.fiber" => "Add one extra portion of vegetables a day",
        "goal.micro.protein" => "Include a protein source in every meal",
        "goal.micro.healthy_snacks" => "Prepare healthy snacks for stressful moments",
        "goal.micro.relaxation" => "Try a five-minute break instead of a snack",
        "goal.micro.weekend_habit" => "Keep one weekday habit on weekends",
        "goal.micro.earlier_dinner" => "Finish dinner before 21:00",
        "goal.micro.fixed_breakfast" => "Eat breakfast at the same time every day",
        "risk.monday_adjustment" => "Monday: adjusting after the weekend",
        "risk.friday_celebration" => "Friday: end-of-week celebration",
        "risk.saturday_freedom" => "Saturday: unstructured day",
        "risk.sunday_anxiety" => "Sunday: pre-week anxiety",
        "risk.tuesday_stress" => "Tuesday: workload builds up",
        "risk.wednesday_pressure" => "Wednesday: midweek pressure",
        "risk.friday_social" => "Friday: social plans",
        "risk.saturday_social" => "Saturday: gatherings",
        "risk.daily_evenings" => "Every evening: comfort eating",
        "opportunity.morning" => "Mornings: build on \"{pattern}\"",
        "opportunity.midweek" => "Midweek: your consistency pays off",
        "opportunity.sunday_prep" => "Sunday: prepare meals for the week",
        "opportunity.early_mornings" => "Early mornings: plan the day's meals",
        "opportunity.any_day" => "Any day: start with one small change",
        "opportunity.social_meals" => "Social meals: share healthy dishes",
        "opportunity.lunch_peak" => "Around {hour}:00: your hunger peak, a good time for a full meal",
        "opportunity.regular_times" => "Regular meal times: a foundation for new habits",
        _ => return None,
    };
    Some(text)
}

fn meal(key: &str) -> Option<&'static str> {
    let text = match key {
        "meal.reason.archetype.0" => "Suits how a {archetype} likes to eat.",
        "meal.reason.archetype.1" => "Chosen with your {archetype} habits in mind.",
        "meal.reason.energy.0" => "Matches your appetite around {time}.",
        "meal.reason.energy.1" => "Sized for how hungry you usually are at {time}.",
        "meal.reason.craving.0" => "Comforting enough to take the edge off a craving.",
        "meal.reason.craving.1" => "Satisfies the urge for comfort food in a balanced way.",
        "meal.reason.schedule.0" => "Quick enough to fit your day.",
        "meal.reason.schedule.1" => "Fits your usual schedule without extra planning.",
        "meal.reason.goal.0" => "Supports your current goal.",
        "meal.reason.goal.1" => "Keeps you on track toward your goal.",
        "meal.reason.balanced.0" => "A balanced option to keep things simple.",
        "meal.reason.balanced.1" => "A reliable, balanced choice.",
        "meal.adapt.start" => "Follow a few planned days so suggestions can adapt to you.",
        "meal.adapt.variety" => "{dish} comes up often; swap it for something new this week.",
        "meal.adapt.energy" => "Portions often miss your appetite; adjust meal sizes to your hunger.",
        "meal.adapt.evening_comfort" => "Add a comforting, balanced dinner to head off evening cravings.",
        "meal.adapt.quick_prep" => "Swap longer recipes for 15-minute options on workdays.",
        "meal.adapt.fiber" => "Add legumes or whole grains to lift fiber intake.",
        "meal.adapt.protein" => "Add a protein source to breakfast.",
        "meal.adapt.weekend_prep" => "Prepare weekend meals on Friday so plans stay on track.",
        "meal.adapt.stress_snacks" => "Keep nuts and fruit ready for stressful afternoons.",
        _ => return None,
    };
    Some(text)
}

fn plan(key: &str) -> Option<&'static str> {
    let text = match key {
        "plan.alert" => "⚠️ {event}: {action}",
        "plan.day.early_bird" => "{day}: use your morning energy to prepare healthy meals.",
        "plan.day.stress_driven" => "{day} may be stressful; prepare calming snacks in advance.",
        "plan.day.social_eater" => "If you have plans today, look at healthy options ahead of time.",
        "plan.day.weekend_warrior.day_off" => "Day off: keep the balance.",
        "plan.day.weekend_warrior.workday" => "Workday: keep the balance.",
        "plan.day.likely_event" => "Likely today: {event}",
        "plan.day.monday_reset" => "Monday after the weekend: getting the meal routine back.",
        "plan.goal.default" => "maintenance",
        "plan.intro.greeting.EARLY_BIRD_PLANNER" => {
            "As a true planner, you get a detailed plan built around your morning habits."
        }
        "plan.intro.greeting.STRESS_DRIVEN" => {
            "This plan accounts for your stress triggers and offers answers to emotional eating."
        }
        "plan.intro.greeting.SOCIAL_EATER" => {
            "Social situations shape your eating, so the plan includes strategies for gatherings and restaurants."
        }
        "plan.intro.greeting.WEEKEND_WARRIOR" => {
            "The plan helps balance active weekends with healthy eating."
        }
        "plan.intro.greeting.BUSY_PROFESSIONAL" => {
            "Quick but nourishing options for your packed schedule."
        }
        "plan.intro.greeting.LATE_STARTER_IMPULSIVE" => {
            "Simple answers for spontaneous moments and late breakfasts."
        }
        "plan.intro.greeting.INTUITIVE_GRAZER" => {
            "The plan supports your intuitive approach with small, frequent meals."
        }
        "plan.intro.greeting.default" => "A personalized plan based on how you actually eat.",
        "plan.intro.archetype" => "Your eating type: {archetype} (profile confidence {confidence}).",
        "plan.intro.influence" => "Your eating is most influenced by: {influence}.",
        "plan.intro.success.high" => "High chances of reaching '{goal}' ({probability})!",
        "plan.intro.success.good" => "Good prospects for '{goal}' if you follow the plan.",
        "plan.intro.success.tailored" => "The plan is tailored to your habits to help reach '{goal}'.",
        "plan.intro.focus" => "Focus of the week: {goal}.",
        "plan.fallback.intro" => "A basic {days}-day meal plan for your goal: {goal}.",
        "plan.fallback.basics" => "Basics",
        "plan.fallback.reasoning" => "Even calorie split across the day.",
        "plan.fallback.breakfast" => "Balanced breakfast",
        "plan.fallback.breakfast.description" => "A balanced breakfast to fuel the day",
        "plan.fallback.lunch" => "Nourishing lunch",
        "plan.fallback.lunch.description" => "A nourishing lunch for a productive day",
        "plan.fallback.dinner" => "Light dinner",
        "plan.fallback.dinner.description" => "A light dinner for recovery",
        "shopping.suggest.fiber" => "More vegetables and fruit for fiber",
        "shopping.suggest.protein" => "Protein snacks such as nuts and seeds",
        "shopping.suggest.busy_professional" => "Ready-to-eat healthy snacks for quick breaks",
        "shopping.suggest.stress_driven" => "Herbal tea and dark chocolate for stressful moments",
        "shopping.suggest.social_eater" => "Nice serving dishes to make home meals special",
        "shopping.reason.zone" => "Improves your growth zone: {area}",
        "shopping.reason.archetype" => "For your eating type: {archetype}",
        _ => return None,
    };
    Some(text)
}

fn visualization(key: &str) -> Option<&'static str> {
    let text = match key {
        "viz.title.weekly" => "📊 Weekly nutrition overview",
        "viz.title.temporal" => "⏰ Your eating time patterns",
        "viz.title.predictions" => "🔮 Behavior predictions",
        "viz.title.zones" => "🔧 Growth zones",
        "viz.title.progress" => "📈 Progress history",
        "viz.title.social" => "🕸️ Social eating patterns",
        "viz.title.report" => "🧬 Full nutrition report",
        "viz.progress.no_data" => "Not enough data to show progress yet",
        "viz.weekend_shift" => "{hours} hours",
        "viz.score.diversity" => "Diversity",
        "viz.score.consistency" => "Consistency",
        "viz.score.goal_alignment" => "Goal alignment",
        "viz.score.diversity.excellent" => "Excellent variety in your diet",
        "viz.score.diversity.good" => "Good variety",
        "viz.score.diversity.fair" => "Moderate variety",
        "viz.score.diversity.needs_improvement" => "Worth adding more variety",
        "viz.score.consistency.excellent" => "Very stable routine",
        "viz.score.consistency.good" => "Stable habits",
        "viz.score.consistency.fair" => "Moderate stability",
        "viz.score.consistency.needs_improvement" => "Routine needs more structure",
        "viz.score.goal_alignment.excellent" => "Excellent fit with your goals",
        "viz.score.goal_alignment.good" => "Supports your goals well",
        "viz.score.goal_alignment.fair" => "Partly fits your goals",
        "viz.score.goal_alignment.needs_improvement" => "Needs adjusting toward your goals",
        "viz.radar.planning" => "Planning",
        "viz.radar.weekends" => "Weekends",
        "viz.radar.stress_control" => "Stress control",
        "viz.radar.home_cooking" => "Home cooking",
        "viz.radar.independence" => "Independence",
        "viz.radar.planning.insight" => "Meal planning: {value}",
        "viz.radar.weekends.insight" => "Weekend control: {value}",
        "viz.radar.stress_control.insight" => "Stress resilience: {value}",
        _ => return None,
    };
    Some(text)
}
