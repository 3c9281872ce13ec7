use serde::{Deserialize, Serialize};

/// Identifier wrapper for financial literacy lessons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(pub String);

impl LessonId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LessonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonCategory {
    Budgeting,
    Credit,
    Ownership,
    #[serde(rename = "EV & Hybrid")]
    EvAndHybrid,
}

impl LessonCategory {
    pub const fn label(self) -> &'static str {
        match self {
            LessonCategory::Budgeting => "Budgeting",
            LessonCategory::Credit => "Credit",
            LessonCategory::Ownership => "Ownership",
            LessonCategory::EvAndHybrid => "EV & Hybrid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: usize,
    pub explanation: String,
}

/// A short lesson with a quiz and a one-time point reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub category: LessonCategory,
    pub duration: String,
    pub points: u32,
    pub description: String,
    pub objectives: Vec<String>,
    pub quiz: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn get(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| &lesson.id == id)
    }

    /// Sum of every lesson's reward.
    pub fn total_points(&self) -> u32 {
        self.lessons.iter().map(|lesson| lesson.points).sum()
    }

    pub fn standard() -> Self {
        Self::new(vec![budgeting_101(), credit_health(), ev_hybrid_basics()])
    }
}

fn question(
    id: &str,
    prompt: &str,
    options: &[&str],
    answer_index: usize,
    explanation: &str,
) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        answer_index,
        explanation: explanation.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn budgeting_101() -> Lesson {
    Lesson {
        id: LessonId::new("budgeting-101"),
        title: "Build a Student Car Budget".to_string(),
        category: LessonCategory::Budgeting,
        duration: "5 min lesson • 3 question quiz".to_string(),
        points: 120,
        description: "Learn how to calculate what you can realistically afford each month by \
                      mapping income, recurring expenses, and estimated vehicle costs."
            .to_string(),
        objectives: strings(&[
            "Track income from campus jobs, internships, and scholarships",
            "Understand fixed vs. flexible expenses and how they influence your car plan",
            "Calculate an all-in monthly budget including insurance, fuel, and maintenance",
        ]),
        quiz: vec![
            question(
                "budgeting-101-q1",
                "You make $900 per month at your campus job. Experts recommend keeping total car \
                 costs under 15% of take-home pay. What is your target car budget?",
                &["$115", "$135", "$175", "$225"],
                1,
                "Fifteen percent of $900 is $135. Staying near this number keeps room for savings \
                 and other student expenses.",
            ),
            question(
                "budgeting-101-q2",
                "Which of the following should ALWAYS be included when planning a car budget?",
                &[
                    "Only the monthly payment",
                    "Monthly payment plus insurance, fuel, parking, and maintenance",
                    "Emergency repairs only",
                    "Gym membership",
                ],
                1,
                "Vehicle affordability is about the full cost of ownership: monthly payment plus \
                 insurance, fuel, parking, and maintenance.",
            ),
            question(
                "budgeting-101-q3",
                "You receive a $3,000 internship stipend. What is the smartest way to use it when \
                 planning for a Toyota?",
                &[
                    "Put the entire amount toward a down payment to lower monthly costs",
                    "Spend it on optional accessories",
                    "Save it for vacation",
                    "Ignore it when budgeting",
                ],
                0,
                "Applying the stipend as a down payment reduces the amount you need to finance and \
                 lowers monthly payments.",
            ),
        ],
    }
}

fn credit_health() -> Lesson {
    Lesson {
        id: LessonId::new("credit-health"),
        title: "Unlock Better Rates with Strong Credit".to_string(),
        category: LessonCategory::Credit,
        duration: "6 min lesson • 4 question quiz".to_string(),
        points: 150,
        description: "Optimize your credit score to unlock the most competitive Toyota Financial \
                      Services student-friendly rates."
            .to_string(),
        objectives: strings(&[
            "Learn how credit scores are calculated and why on-time payments matter",
            "Understand how co-signers can improve loan approval odds",
            "Build a 90-day action plan to level up your score before applying",
        ]),
        quiz: vec![
            question(
                "credit-health-q1",
                "What factor has the biggest impact on your credit score?",
                &[
                    "Credit inquiries",
                    "Payment history",
                    "Types of credit",
                    "Age of credit history",
                ],
                1,
                "Payment history typically accounts for 35% of FICO scores, making on-time \
                 payments the most critical factor.",
            ),
            question(
                "credit-health-q2",
                "You are new to credit and want a Toyota this fall. Which strategy helps most?",
                &[
                    "Opening several credit cards now",
                    "Paying existing balances down and asking for a credit limit increase",
                    "Closing your oldest credit card",
                    "Ignoring credit until you apply",
                ],
                1,
                "Lowering utilization and increasing limits reduces the percent of credit used, \
                 often boosting scores quickly.",
            ),
            question(
                "credit-health-q3",
                "How can a co-signer help with Toyota Financial Services?",
                &[
                    "They guarantee free maintenance",
                    "They split the down payment",
                    "Their stronger credit profile can unlock better rates and approvals",
                    "They eliminate the need for insurance",
                ],
                2,
                "A co-signer with established credit can help secure lower rates by sharing \
                 responsibility for the loan.",
            ),
            question(
                "credit-health-q4",
                "Which of the following is part of a healthy 90-day credit tune-up?",
                &[
                    "Missing one payment to focus on savings",
                    "Keeping credit utilization below 30%",
                    "Opening multiple store cards",
                    "Canceling automatic payments",
                ],
                1,
                "Utilizing less than 30% of your available credit shows responsible usage and \
                 positively impacts your score.",
            ),
        ],
    }
}

fn ev_hybrid_basics() -> Lesson {
    Lesson {
        id: LessonId::new("ev-hybrid-basics"),
        title: "Hybrid vs. EV: What Fits Your Commute?".to_string(),
        category: LessonCategory::EvAndHybrid,
        duration: "4 min lesson • 3 question quiz".to_string(),
        points: 100,
        description: "Compare Toyota's hybrid and all-electric lineup to pick the ride that best \
                      matches your campus commute and charging access."
            .to_string(),
        objectives: strings(&[
            "Understand charging options for bZ4X owners living on or off campus",
            "Estimate savings from Toyota hybrid MPG advantages",
            "Match driving habits with the right electrified powertrain",
        ]),
        quiz: vec![
            question(
                "ev-hybrid-basics-q1",
                "You have limited charging on campus but drive 40 miles daily. Which Toyota is the \
                 easiest win?",
                &[
                    "bZ4X all-electric",
                    "Prius Prime plug-in hybrid",
                    "GR Supra",
                    "Tacoma TRD Pro",
                ],
                1,
                "Prius Prime offers 44 miles of EV range plus gas backup, making it flexible for \
                 limited charging.",
            ),
            question(
                "ev-hybrid-basics-q2",
                "Which benefit is unique to Toyota hybrids like Corolla Hybrid?",
                &[
                    "Zero insurance cost",
                    "Self-charging battery that never needs to plug in",
                    "Free parking everywhere",
                    "No maintenance required",
                ],
                1,
                "Hybrid batteries recharge through regenerative braking, so you never have to plug \
                 them in.",
            ),
            question(
                "ev-hybrid-basics-q3",
                "What incentives can students unlock by completing Toyota Financial learning paths?",
                &[
                    "Interest rate reductions and exclusive lease cash offers",
                    "Free textbooks",
                    "Unlimited car washes",
                    "Automatic tuition discounts",
                ],
                0,
                "The program rewards learners with special rate reductions, down payment matches, \
                 and loyalty incentives.",
            ),
        ],
    }
}
