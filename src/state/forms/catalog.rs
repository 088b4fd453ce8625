//! Field table and section layout of the burnout form

use super::field::{FieldSpec, SelectOption};

/// Display-only cluster of fields under one heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub id: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

const SATISFACTION: &[SelectOption] = &[
    SelectOption::code(1, "Low"),
    SelectOption::code(2, "Medium"),
    SelectOption::code(3, "High"),
    SelectOption::code(4, "Very High"),
];

const BUSINESS_TRAVEL: &[SelectOption] = &[
    SelectOption::name("Non-Travel", "Never"),
    SelectOption::name("Travel_Rarely", "Rarely"),
    SelectOption::name("Travel Frequently", "Frequently"),
];

const DEPARTMENTS: &[SelectOption] = &[
    SelectOption::name("Human Resources", "Human Resources"),
    SelectOption::name("Research & Development", "Research & Development"),
    SelectOption::name("Sales", "Sales"),
];

const EDUCATION: &[SelectOption] = &[
    SelectOption::code(2, "School"),
    SelectOption::code(3, "Bachelor"),
    SelectOption::code(4, "Master"),
    SelectOption::code(5, "Doctor"),
];

const EDUCATION_FIELDS: &[SelectOption] = &[
    SelectOption::name("Human Resources", "Human Resources"),
    SelectOption::name("Life Sciences", "Life Sciences"),
    SelectOption::name("Marketing", "Marketing"),
    SelectOption::name("Medical", "Medical"),
    SelectOption::name("Technical Degree", "Technical Degree"),
    SelectOption::name("Other", "Other"),
];

const GENDERS: &[SelectOption] = &[
    SelectOption::name("Male", "Male"),
    SelectOption::name("Female", "Female"),
];

const JOB_LEVELS: &[SelectOption] = &[
    SelectOption::code(1, "Staff"),
    SelectOption::code(2, "Senior Staff"),
    SelectOption::code(3, "First Level Management"),
    SelectOption::code(4, "Middle Management"),
    SelectOption::code(5, "Senior management"),
];

const JOB_ROLES: &[SelectOption] = &[
    SelectOption::name("Healthcare Representative", "Healthcare Representative"),
    SelectOption::name("Human Resources", "Human Resources"),
    SelectOption::name("Laboratory Technician", "Laboratory Technician"),
    SelectOption::name("Manager", "Manager"),
    SelectOption::name("Manufacturing Director", "Manufacturing Director"),
    SelectOption::name("Research Director", "Research Director"),
    SelectOption::name("Research Scientist", "Research Scientist"),
    SelectOption::name("Sales Executive", "Sales Executive"),
    SelectOption::name("Sales Representative", "Sales Representative"),
];

const MARITAL_STATUS: &[SelectOption] = &[
    SelectOption::name("Single", "Single"),
    SelectOption::name("Married", "Married"),
    SelectOption::name("Divorced", "Divorced"),
];

const OVERTIME: &[SelectOption] = &[
    SelectOption::name("No", "No"),
    SelectOption::name("Yes", "Yes"),
];

const PERFORMANCE: &[SelectOption] = &[
    SelectOption::code(1, "Low"),
    SelectOption::code(2, "Good"),
    SelectOption::code(3, "Excellent"),
    SelectOption::code(4, "Outstanding"),
];

const WORK_LIFE_BALANCE: &[SelectOption] = &[
    SelectOption::code(1, "Bad"),
    SelectOption::code(2, "Good"),
    SelectOption::code(3, "Better"),
    SelectOption::code(4, "Best"),
];

/// Every field of the form, in declaration order
pub static FIELDS: [FieldSpec; 30] = [
    FieldSpec::number("age", "Your age:", 18).max(99),
    FieldSpec::select(
        "businessTravel",
        "Frequency business travels:",
        BUSINESS_TRAVEL,
    ),
    FieldSpec::number("hourlyRate", "Hourly rate, $:", 0).step(10),
    FieldSpec::number("dailyRate", "Daily rate, $:", 0).step(100),
    FieldSpec::number("monthlyRate", "Monthly rate, $:", 0).step(1000),
    FieldSpec::number("monthlyIncome", "Monthly income, $:", 0).step(1000),
    FieldSpec::select("department", "Department:", DEPARTMENTS),
    FieldSpec::number(
        "distanceFromHome",
        "Distance from home to workplace, km:",
        0,
    ),
    FieldSpec::select("education", "Education (including ongoing):", EDUCATION),
    FieldSpec::select("educationField", "Education field:", EDUCATION_FIELDS),
    FieldSpec::select(
        "environmentSatisfaction",
        "Satisfaction with workplace (lighting, air conditioning, etc.):",
        SATISFACTION,
    ),
    FieldSpec::select("gender", "Your gender:", GENDERS),
    FieldSpec::select("jobInvolvement", "Level of job involvement:", SATISFACTION),
    FieldSpec::select("jobLevel", "Level of job:", JOB_LEVELS),
    FieldSpec::select("jobRole", "Job role:", JOB_ROLES),
    FieldSpec::select("jobSatisfaction", "Satisfaction with job:", SATISFACTION),
    FieldSpec::select("maritalStatus", "Marital status:", MARITAL_STATUS),
    FieldSpec::number(
        "numCompaniesWorked",
        "Number of companies you have worked for before current company:",
        0,
    ),
    FieldSpec::select(
        "overTime",
        "Overtime work at least once a week:",
        OVERTIME,
    ),
    FieldSpec::number(
        "percentSalaryHike",
        "Latest salary increase at current company, %:",
        0,
    )
    .step(5),
    FieldSpec::select("performanceRating", "Your performance rating:", PERFORMANCE),
    FieldSpec::select(
        "relationshipSatisfaction",
        "Satisfaction with colleagues and work relationships:",
        SATISFACTION,
    ),
    FieldSpec::number("stockOptionLevel", "Level of stock options:", 0).max(3),
    FieldSpec::number(
        "totalWorkingYears",
        "Total years of working experience:",
        0,
    ),
    FieldSpec::number(
        "trainingTimesLastYear",
        "Number of advanced education courses completed last year (Coursera, Udemy, etc.):",
        0,
    ),
    FieldSpec::select(
        "workLifeBalance",
        "Satisfaction with work-life balance:",
        WORK_LIFE_BALANCE,
    ),
    FieldSpec::number(
        "yearsAtCompany",
        "Years spent at your current company:",
        0,
    ),
    FieldSpec::number("yearsInCurrentRole", "Years in your current role:", 0),
    FieldSpec::number("yearsSinceLastPromotion", "Years since last promotion:", 0)
        .mirrors("yearsInCurrentRole"),
    FieldSpec::number(
        "yearsWithCurrManager",
        "Years with your current manager:",
        0,
    ),
];

pub static GROUPS: [Group; 8] = [
    Group {
        id: "general",
        title: "General Info",
        items: &["age", "gender", "maritalStatus"],
    },
    Group {
        id: "education",
        title: "Education",
        items: &["education", "educationField", "trainingTimesLastYear"],
    },
    Group {
        id: "experience",
        title: "Work Experience",
        items: &["totalWorkingYears", "numCompaniesWorked"],
    },
    Group {
        id: "job",
        title: "Current Job",
        items: &[
            "department",
            "jobRole",
            "jobLevel",
            "yearsAtCompany",
            "yearsInCurrentRole",
            "yearsWithCurrManager",
            "yearsSinceLastPromotion",
            "businessTravel",
            "jobSatisfaction",
        ],
    },
    Group {
        id: "performance",
        title: "Performance",
        items: &["jobInvolvement", "overTime", "performanceRating"],
    },
    Group {
        id: "environment",
        title: "Work Environment",
        items: &["environmentSatisfaction", "relationshipSatisfaction"],
    },
    Group {
        id: "balance",
        title: "Work Life Balance",
        items: &["distanceFromHome", "workLifeBalance"],
    },
    Group {
        id: "income",
        title: "Income",
        items: &[
            "monthlyIncome",
            "hourlyRate",
            "dailyRate",
            "monthlyRate",
            "percentSalaryHike",
            "stockOptionLevel",
        ],
    },
];

/// Look up a field by id
pub fn field(id: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.id == id)
}

/// Fields in rendered order (group by group)
pub fn ordered_fields() -> impl Iterator<Item = &'static FieldSpec> {
    GROUPS
        .iter()
        .flat_map(|g| g.items.iter())
        .filter_map(|id| field(id))
}

/// Number of inputs rendered across all groups
pub fn input_count() -> usize {
    GROUPS.iter().map(|g| g.items.len()).sum()
}
