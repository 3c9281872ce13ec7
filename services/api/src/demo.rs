use crate::infra::load_content_from;
use campus_drive::error::AppError;
use campus_drive::workflows::catalog::ContentCatalog;
use campus_drive::workflows::matching::{
    rank_vehicles, FinancialPreferences, FinancingMode, RankedVehicle,
};
use campus_drive::workflows::progression::{GoalForm, SwipeDecision};
use campus_drive::workflows::session::{default_profile, SessionService, SessionServiceError};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FinancingArg {
    Finance,
    Lease,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Monthly car budget in dollars
    #[arg(long, default_value_t = 220)]
    pub(crate) budget: u32,
    /// Estimated credit score (omit if unknown)
    #[arg(long)]
    pub(crate) credit: Option<u16>,
    /// Score against a finance or lease plan instead of the budget alone
    #[arg(long, value_enum)]
    pub(crate) financing: Option<FinancingArg>,
    /// Target monthly payment for the plan (defaults to the budget)
    #[arg(long)]
    pub(crate) monthly_payment: Option<u32>,
    /// Down payment (finance) or due at signing (lease)
    #[arg(long, default_value_t = 0)]
    pub(crate) upfront: u32,
    /// Loan or lease term in months (defaults to 60 for finance, 36 for lease)
    #[arg(long)]
    pub(crate) term_months: Option<u16>,
    /// Annual lease mileage allowance
    #[arg(long, default_value_t = 12_000)]
    pub(crate) mileage: u32,
    /// Optional vehicle CSV export to rank instead of the bundled lineup
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Only print the top N vehicles
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print the score breakdown for each vehicle
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional vehicle CSV export to use for the session
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the final session snapshot as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let content = load_optional_catalog(args.catalog.as_ref())?;
    let preferences = preferences_from_args(&args)?;

    let mut profile = default_profile();
    profile.monthly_budget = args.budget;
    profile.credit_score_estimate = args.credit;

    let ranked = rank_vehicles(content.vehicles.vehicles(), &profile, preferences.as_ref());
    let limit = args.limit.unwrap_or(ranked.len());

    let mode = preferences
        .as_ref()
        .map(FinancialPreferences::mode)
        .unwrap_or_default();
    let credit = args
        .credit
        .map(|score| score.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!(
        "Vehicle matches for a ${}/mo budget (credit {}, {})",
        args.budget,
        credit,
        mode.label()
    );
    for (position, entry) in ranked.iter().take(limit).enumerate() {
        render_ranked(position + 1, entry, mode, args.explain);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let content = Arc::new(load_optional_catalog(args.catalog.as_ref())?);
    let service = SessionService::new(content.clone());

    println!("Campus Drive demo");
    let profile = service.state().profile;
    println!(
        "- Student: {} ({}, {} '{})",
        profile.name,
        profile.major,
        profile.school,
        profile.graduation_year % 100
    );
    println!(
        "- Budget ${}/mo, credit estimate {}",
        profile.monthly_budget,
        profile
            .credit_score_estimate
            .map(|score| score.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );

    let preferences = service.update_preferences(FinancialPreferences::Finance {
        monthly_payment: 350,
        down_payment: 2500,
        term_months: 60,
    })?;
    println!(
        "- Financing plan: {} at ${}/mo with ${} down",
        preferences.mode().label(),
        preferences.monthly_payment(),
        preferences.upfront_budget()
    );

    println!("\nTop matches");
    let matches = service.matches();
    for entry in matches.iter().take(3) {
        let marker = if entry.suggested { " (suggested)" } else { "" };
        println!(
            "- {}: {}{}",
            entry.vehicle.display_name(),
            entry.score,
            marker
        );
    }

    println!("\nSwipes");
    for (entry, decision) in matches.iter().take(3).zip([
        SwipeDecision::Like,
        SwipeDecision::Like,
        SwipeDecision::Skip,
    ]) {
        let record = service.record_swipe(entry.vehicle.id.clone(), decision)?;
        println!(
            "- {:?} {} at score {}",
            record.decision, record.vehicle_id, record.match_score
        );
    }

    println!("\nLessons");
    for lesson in content.lessons.lessons().iter().take(2) {
        let answers: Vec<usize> = lesson
            .quiz
            .iter()
            .map(|question| question.answer_index)
            .collect();
        let completion = service.complete_lesson(&lesson.id, &answers)?;
        println!(
            "- {} [{}]: {} | +{} pts (total {}, level {})",
            lesson.title,
            lesson.category.label(),
            completion.quiz.summary(),
            completion.points_awarded,
            completion.points,
            completion.level
        );
    }

    if let Some(top) = matches.first() {
        let goal = service.add_goal(GoalForm {
            title: format!("Down payment for the {}", top.vehicle.name),
            target_vehicle: top.vehicle.display_name(),
            target_date: "May 2026".to_string(),
            target_budget: "2500".to_string(),
            monthly_contribution: "150".to_string(),
            notes: String::new(),
        })?;
        println!("\nGoal created: {} (${:.0})", goal.title, goal.target_budget);
        if let Some(months) = goal.months_to_target() {
            println!("- {} months at ${:.0}/mo", months, goal.monthly_contribution);
        }
    }

    let snapshot = service.snapshot();
    println!("\nProgress");
    println!(
        "- {} pts | level {} | {} pts to level {}",
        snapshot.points,
        snapshot.level,
        snapshot.level_progress.points_to_next_level,
        snapshot.level + 1
    );
    println!("- Offers unlocked: {}", snapshot.offers.unlocked_count());
    for tier in &snapshot.offers.unlocked {
        println!("  - {}: {}", tier.title, tier.perk);
    }
    if let Some(next) = &snapshot.offers.next {
        println!(
            "- Next offer: {} in {} pts ({:.0}% of the way)",
            next.title,
            snapshot.offers.points_to_next,
            snapshot.offers.fraction * 100.0
        );
    }

    let garage = service.garage();
    println!(
        "\nGarage: {} pinned, {} new matches",
        garage.pinned, garage.new_matches
    );
    for entry in &garage.vehicles {
        println!(
            "- {} | ${}/mo finance | {}",
            entry.vehicle.display_name(),
            entry.vehicle.monthly_finance,
            entry.vehicle.fuel_economy
        );
    }

    if args.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("\nSession snapshot:\n{}", json),
            Err(err) => println!("\nSession snapshot unavailable: {}", err),
        }
    }

    Ok(())
}

fn load_optional_catalog(path: Option<&PathBuf>) -> Result<ContentCatalog, AppError> {
    match path {
        Some(path) => load_content_from(path),
        None => Ok(ContentCatalog::standard()),
    }
}

fn preferences_from_args(args: &MatchArgs) -> Result<Option<FinancialPreferences>, AppError> {
    let Some(financing) = args.financing else {
        return Ok(None);
    };

    let monthly_payment = args.monthly_payment.unwrap_or(args.budget);
    let preferences = match financing {
        FinancingArg::Finance => FinancialPreferences::Finance {
            monthly_payment,
            down_payment: args.upfront,
            term_months: args.term_months.unwrap_or(60),
        },
        FinancingArg::Lease => FinancialPreferences::Lease {
            monthly_payment,
            due_at_signing: args.upfront,
            mileage_allowance: args.mileage,
            term_months: args.term_months.unwrap_or(36),
        },
    };

    preferences
        .validate()
        .map_err(SessionServiceError::from)?;
    Ok(Some(preferences))
}

fn render_ranked(position: usize, entry: &RankedVehicle<'_>, mode: FinancingMode, explain: bool) {
    let vehicle = entry.vehicle;
    let payment = match mode {
        FinancingMode::Finance => vehicle.monthly_finance,
        FinancingMode::Lease => vehicle.monthly_lease,
    };
    println!(
        "{:>2}. {} - {} (${}/mo {}, MSRP ${})",
        position,
        vehicle.display_name(),
        entry.score,
        payment,
        mode.label(),
        vehicle.msrp
    );

    if explain {
        for component in &entry.outcome.components {
            println!(
                "      - {:?}: {:.1} x {:.2} ({})",
                component.factor, component.score, component.weight, component.notes
            );
        }
    }
}
