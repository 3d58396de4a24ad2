use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::analytics::{
    AnalyticsSnapshot, BehavioralMetrics, DiversityMetric, DiversityStanding, FunnelStage, Kpi,
    Sentiment, SentimentPoint, SourceMetric, Trend, VideoInsights, VideoInterview,
    VideoInterviewKind, VideoOutcome,
};
use crate::models::assessment::{
    Assessment, AssessmentKind, AssessmentOutcome, AssessmentResult, AssessmentStatus,
};
use crate::models::candidate::{
    Candidate, CandidateAssessment, CandidateProfile, EducationEntry, EligibilityCheck,
    EligibilityVerdict, ParsedResume, PipelineStatus, WorkHistoryEntry,
};
use crate::models::content::{FeaturePage, FeatureSection, HelpArticle, HelpCategory};
use crate::models::integration::{Integration, IntegrationCategory, IntegrationStatus};
use crate::models::interview::{Interview, InterviewKind, InterviewStatus, Interviewer};
use crate::models::job::{ChannelOption, Job, JobStatus, JobType};
use crate::models::offer::{Offer, OfferStatus, OnboardingTask};
use crate::models::talent::{Availability, TalentPoolMember};
use crate::models::template::{CommunicationTemplate, TemplateCategory, TemplateChannel};
use crate::utils::text;

use super::StoreInner;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn seed() -> StoreInner {
    let candidates = seed_candidates();
    let profiles = seed_profiles(&candidates);
    let video_interviews = seed_video_interviews();
    let video_insights = seed_video_insights(&video_interviews);

    StoreInner {
        jobs: RwLock::new(seed_jobs()),
        drafts: RwLock::new(HashMap::new()),
        interviews: RwLock::new(seed_interviews()),
        templates: RwLock::new(seed_templates()),
        integrations: RwLock::new(seed_integrations()),
        candidates,
        profiles,
        offers: seed_offers(),
        onboarding_tasks: seed_onboarding_tasks(),
        assessments: seed_assessments(),
        assessment_results: seed_assessment_results(),
        talent_pool: seed_talent_pool(),
        interviewers: seed_interviewers(),
        time_slots: strings(&[
            "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "13:00", "13:30", "14:00",
            "14:30", "15:00", "15:30", "16:00", "16:30",
        ]),
        channel_catalog: seed_channel_catalog(),
        analytics: seed_analytics(),
        video_interviews,
        video_insights,
        features: seed_features(),
        help_categories: seed_help_categories(),
        help_articles: seed_help_articles(),
    }
}

fn seed_jobs() -> Vec<Job> {
    let rows = [
        (
            "Senior Frontend Developer",
            "San Francisco, CA",
            JobType::FullTime,
            JobStatus::Active,
            24,
            date(2025, 1, 10),
            vec!["LinkedIn", "Indeed"],
        ),
        (
            "Product Manager",
            "Remote",
            JobType::FullTime,
            JobStatus::Draft,
            0,
            date(2025, 1, 11),
            vec![],
        ),
        (
            "UX Designer",
            "New York, NY",
            JobType::Contract,
            JobStatus::Active,
            18,
            date(2025, 1, 8),
            vec!["LinkedIn", "AngelList"],
        ),
        (
            "Backend Engineer",
            "Austin, TX",
            JobType::FullTime,
            JobStatus::Closed,
            45,
            date(2025, 1, 5),
            vec!["Indeed", "Stack Overflow"],
        ),
    ];

    rows.into_iter()
        .map(
            |(title, location, job_type, status, applicants, created, channels)| Job {
                id: Uuid::new_v4(),
                title: title.to_string(),
                location: location.to_string(),
                job_type,
                department: None,
                experience_level: None,
                status,
                applicants,
                description: None,
                requirements: None,
                benefits: None,
                channels: strings(&channels),
                created_at: Utc::now(),
                created_date: created,
            },
        )
        .collect()
}

fn seed_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: Uuid::new_v4(),
            name: "Sarah Johnson".into(),
            email: "sarah.johnson@email.com".into(),
            phone: Some("+1 (555) 123-4567".into()),
            position: "Senior Frontend Developer".into(),
            status: PipelineStatus::Screening,
            ai_score: 95,
            experience: "5+ years".into(),
            skills: strings(&["React", "TypeScript", "Node.js"]),
        },
        Candidate {
            id: Uuid::new_v4(),
            name: "Michael Chen".into(),
            email: "michael.chen@email.com".into(),
            phone: Some("+1 (555) 987-6543".into()),
            position: "Product Manager".into(),
            status: PipelineStatus::Interview,
            ai_score: 88,
            experience: "7+ years".into(),
            skills: strings(&["Product Strategy", "Agile", "Analytics"]),
        },
        Candidate {
            id: Uuid::new_v4(),
            name: "Emily Rodriguez".into(),
            email: "emily.r@email.com".into(),
            phone: Some("+1 (555) 456-7890".into()),
            position: "UX Designer".into(),
            status: PipelineStatus::Applied,
            ai_score: 92,
            experience: "4+ years".into(),
            skills: strings(&["Figma", "User Research", "Prototyping"]),
        },
    ]
}

fn seed_profiles(candidates: &[Candidate]) -> HashMap<Uuid, CandidateProfile> {
    let mut profiles = HashMap::new();
    // Only the first seeded candidate has a fully parsed profile; the rest
    // surface the list-level fields until their resumes are processed.
    if let Some(sarah) = candidates.first() {
        profiles.insert(
            sarah.id,
            CandidateProfile {
                location: "San Francisco, CA".into(),
                applied_date: date(2024, 1, 15),
                resume_url: Some("/resume.pdf".into()),
                linkedin_url: Some("https://linkedin.com/in/sarahjohnson".into()),
                github_url: Some("https://github.com/sarahjohnson".into()),
                resume: ParsedResume {
                    experience: vec![
                        WorkHistoryEntry {
                            title: "Senior Frontend Developer".into(),
                            company: "TechCorp Inc.".into(),
                            duration: "2022 - Present".into(),
                            description:
                                "Led frontend development for e-commerce platform serving 1M+ users"
                                    .into(),
                        },
                        WorkHistoryEntry {
                            title: "Frontend Developer".into(),
                            company: "StartupXYZ".into(),
                            duration: "2020 - 2022".into(),
                            description:
                                "Built responsive web applications using React and TypeScript"
                                    .into(),
                        },
                    ],
                    education: vec![EducationEntry {
                        degree: "Bachelor of Science in Computer Science".into(),
                        school: "University of California, Berkeley".into(),
                        year: "2020".into(),
                    }],
                    skills: strings(&[
                        "React",
                        "TypeScript",
                        "Node.js",
                        "GraphQL",
                        "CSS",
                        "JavaScript",
                        "Python",
                    ]),
                },
                eligibility: vec![
                    EligibilityCheck {
                        rule: "Minimum 3 years React experience".into(),
                        verdict: EligibilityVerdict::Pass,
                        evidence: "5+ years experience with React".into(),
                    },
                    EligibilityCheck {
                        rule: "TypeScript proficiency".into(),
                        verdict: EligibilityVerdict::Pass,
                        evidence: "Listed in skills and work experience".into(),
                    },
                    EligibilityCheck {
                        rule: "Located in CA or Remote".into(),
                        verdict: EligibilityVerdict::Pass,
                        evidence: "San Francisco, CA".into(),
                    },
                    EligibilityCheck {
                        rule: "Bachelor's degree".into(),
                        verdict: EligibilityVerdict::Pass,
                        evidence: "BS Computer Science, UC Berkeley".into(),
                    },
                ],
                assessments: vec![
                    CandidateAssessment {
                        name: "React Coding Challenge".into(),
                        outcome: AssessmentOutcome::Completed {
                            score: 92,
                            completed_date: date(2024, 1, 18),
                            time_spent: Some("45 minutes".into()),
                        },
                    },
                    CandidateAssessment {
                        name: "System Design Assessment".into(),
                        outcome: AssessmentOutcome::InProgress,
                    },
                ],
            },
        );
    }
    profiles
}

fn seed_interviews() -> Vec<Interview> {
    vec![
        Interview {
            id: Uuid::new_v4(),
            candidate_name: "Sarah Johnson".into(),
            position: "Senior Frontend Developer".into(),
            date: date(2024, 1, 20),
            time: "10:00".into(),
            duration_minutes: 60,
            kind: InterviewKind::Video,
            status: InterviewStatus::Scheduled,
            interviewers: strings(&["John Smith", "Jane Doe"]),
            location: "Zoom Meeting".into(),
            notes: None,
        },
        Interview {
            id: Uuid::new_v4(),
            candidate_name: "Michael Chen".into(),
            position: "Product Manager".into(),
            date: date(2024, 1, 20),
            time: "14:00".into(),
            duration_minutes: 45,
            kind: InterviewKind::Phone,
            status: InterviewStatus::Scheduled,
            interviewers: strings(&["Alice Brown"]),
            location: "Phone Call".into(),
            notes: None,
        },
        Interview {
            id: Uuid::new_v4(),
            candidate_name: "Emily Rodriguez".into(),
            position: "UX Designer".into(),
            date: date(2024, 1, 19),
            time: "11:00".into(),
            duration_minutes: 60,
            kind: InterviewKind::InPerson,
            status: InterviewStatus::Completed,
            interviewers: strings(&["Bob Wilson", "Carol Davis"]),
            location: "Conference Room A".into(),
            notes: None,
        },
    ]
}

fn seed_interviewers() -> Vec<Interviewer> {
    [
        ("Sarah Johnson", "Senior Engineer"),
        ("Mike Chen", "Engineering Manager"),
        ("Lisa Rodriguez", "Lead Designer"),
        ("David Kim", "Principal Engineer"),
    ]
    .into_iter()
    .map(|(name, title)| Interviewer {
        id: Uuid::new_v4(),
        name: name.to_string(),
        title: title.to_string(),
    })
    .collect()
}

fn seed_channel_catalog() -> Vec<ChannelOption> {
    [
        ("LinkedIn", "Professional network", true),
        ("Indeed", "Job search engine", true),
        ("AngelList", "Startup jobs", false),
        ("Stack Overflow", "Developer community", false),
    ]
    .into_iter()
    .map(|(name, description, recommended)| ChannelOption {
        name: name.to_string(),
        description: description.to_string(),
        recommended,
    })
    .collect()
}

fn seed_offers() -> Vec<Offer> {
    vec![
        Offer {
            id: Uuid::new_v4(),
            candidate_name: "Sarah Johnson".into(),
            position: "Senior Frontend Developer".into(),
            department: "Engineering".into(),
            salary: Decimal::from(120_000),
            currency: "USD".into(),
            start_date: date(2024, 2, 1),
            status: OfferStatus::Pending,
            sent_date: date(2024, 1, 18),
            expiry_date: Some(date(2024, 1, 25)),
            accepted_date: None,
        },
        Offer {
            id: Uuid::new_v4(),
            candidate_name: "Michael Chen".into(),
            position: "Product Manager".into(),
            department: "Product".into(),
            salary: Decimal::from(130_000),
            currency: "USD".into(),
            start_date: date(2024, 2, 15),
            status: OfferStatus::Accepted,
            sent_date: date(2024, 1, 15),
            expiry_date: None,
            accepted_date: Some(date(2024, 1, 17)),
        },
        Offer {
            id: Uuid::new_v4(),
            candidate_name: "Emily Rodriguez".into(),
            position: "UX Designer".into(),
            department: "Design".into(),
            salary: Decimal::from(95_000),
            currency: "USD".into(),
            start_date: date(2024, 1, 30),
            status: OfferStatus::Negotiating,
            sent_date: date(2024, 1, 16),
            expiry_date: None,
            accepted_date: None,
        },
    ]
}

fn seed_onboarding_tasks() -> Vec<OnboardingTask> {
    vec![OnboardingTask {
        id: Uuid::new_v4(),
        candidate_name: "Michael Chen".into(),
        position: "Product Manager".into(),
        start_date: date(2024, 2, 15),
        completed_tasks: 3,
        total_tasks: 8,
        next_task: "IT Equipment Setup".into(),
    }]
}

fn seed_assessments() -> Vec<Assessment> {
    vec![
        Assessment {
            id: Uuid::new_v4(),
            name: "React Developer Assessment".into(),
            kind: AssessmentKind::Technical,
            duration_minutes: 60,
            questions: 25,
            candidates: 42,
            avg_score: 78,
            status: AssessmentStatus::Active,
            created_date: date(2024, 1, 10),
        },
        Assessment {
            id: Uuid::new_v4(),
            name: "Product Manager Aptitude Test".into(),
            kind: AssessmentKind::Aptitude,
            duration_minutes: 45,
            questions: 30,
            candidates: 18,
            avg_score: 82,
            status: AssessmentStatus::Active,
            created_date: date(2024, 1, 8),
        },
        Assessment {
            id: Uuid::new_v4(),
            name: "UX Design Portfolio Review".into(),
            kind: AssessmentKind::Portfolio,
            duration_minutes: 30,
            questions: 10,
            candidates: 12,
            avg_score: 85,
            status: AssessmentStatus::Draft,
            created_date: date(2024, 1, 15),
        },
    ]
}

fn seed_assessment_results() -> Vec<AssessmentResult> {
    vec![
        AssessmentResult {
            id: Uuid::new_v4(),
            candidate_name: "Sarah Johnson".into(),
            assessment_name: "React Developer Assessment".into(),
            outcome: AssessmentOutcome::Completed {
                score: 92,
                completed_date: date(2024, 1, 18),
                time_spent: None,
            },
        },
        AssessmentResult {
            id: Uuid::new_v4(),
            candidate_name: "Michael Chen".into(),
            assessment_name: "Product Manager Aptitude Test".into(),
            outcome: AssessmentOutcome::Completed {
                score: 88,
                completed_date: date(2024, 1, 17),
                time_spent: None,
            },
        },
        AssessmentResult {
            id: Uuid::new_v4(),
            candidate_name: "Emily Rodriguez".into(),
            assessment_name: "React Developer Assessment".into(),
            outcome: AssessmentOutcome::InProgress,
        },
    ]
}

fn seed_templates() -> Vec<CommunicationTemplate> {
    vec![
        CommunicationTemplate {
            id: Uuid::new_v4(),
            name: "Interview Invitation".into(),
            channel: TemplateChannel::Email,
            subject: "Interview Invitation - {{job.title}} Position".into(),
            content: "Dear {{candidate.name}},\n\nWe are pleased to invite you for an interview for the {{job.title}} position at {{company.name}}.\n\nPlease reply with your availability for the following dates:\n- {{interview.date1}}\n- {{interview.date2}}\n\nBest regards,\n{{recruiter.name}}".into(),
            category: TemplateCategory::Interview,
            usage: 45,
        },
        CommunicationTemplate {
            id: Uuid::new_v4(),
            name: "Application Acknowledgment".into(),
            channel: TemplateChannel::Email,
            subject: "Thank you for your application - {{job.title}}".into(),
            content: "Hi {{candidate.name}},\n\nThank you for applying to the {{job.title}} position. We have received your application and will review it carefully.\n\nWe will contact you within {{review.timeframe}} with next steps.\n\nBest regards,\n{{company.name}} Hiring Team".into(),
            category: TemplateCategory::Acknowledgment,
            usage: 128,
        },
        CommunicationTemplate {
            id: Uuid::new_v4(),
            name: "Interview Reminder".into(),
            channel: TemplateChannel::Sms,
            subject: String::new(),
            content: "Hi {{candidate.name}}, this is a reminder of your interview tomorrow at {{interview.time}} for the {{job.title}} position. Meeting link: {{interview.link}}".into(),
            category: TemplateCategory::Reminder,
            usage: 67,
        },
    ]
}

fn seed_integrations() -> Vec<Integration> {
    let rows: [(&str, &str, &str, IntegrationCategory, &[&str], bool); 8] = [
        (
            "Workday",
            "Sync employee data and automate onboarding workflows",
            "🏢",
            IntegrationCategory::Hris,
            &["Employee sync", "Onboarding automation", "Data management"],
            true,
        ),
        (
            "BambooHR",
            "Streamline HR processes and employee management",
            "🎋",
            IntegrationCategory::Hris,
            &["Employee records", "Time tracking", "Performance management"],
            false,
        ),
        (
            "Google Calendar",
            "Sync interview schedules and automate meeting creation",
            "📅",
            IntegrationCategory::Calendar,
            &["Calendar sync", "Meeting automation", "Availability checking"],
            true,
        ),
        (
            "Outlook Calendar",
            "Integrate with Microsoft Outlook for seamless scheduling",
            "📆",
            IntegrationCategory::Calendar,
            &["Outlook sync", "Teams integration", "Enterprise security"],
            false,
        ),
        (
            "Slack",
            "Send notifications and updates to your team channels",
            "💬",
            IntegrationCategory::Communication,
            &["Team notifications", "Candidate updates", "Custom alerts"],
            false,
        ),
        (
            "Microsoft Teams",
            "Collaborate and communicate within your organization",
            "👥",
            IntegrationCategory::Communication,
            &["Team collaboration", "Video interviews", "File sharing"],
            false,
        ),
        (
            "Checkr",
            "Automated background checks and verification",
            "🛡️",
            IntegrationCategory::Background,
            &["Criminal background", "Employment verification", "Education checks"],
            false,
        ),
        (
            "Sterling",
            "Comprehensive background screening solutions",
            "🔍",
            IntegrationCategory::Background,
            &["Global screening", "Compliance management", "Real-time updates"],
            false,
        ),
    ];

    rows.into_iter()
        .map(|(name, description, logo, category, features, connected)| {
            let mut integration = Integration {
                id: Uuid::new_v4(),
                name: name.to_string(),
                description: description.to_string(),
                logo: logo.to_string(),
                category,
                features: strings(features),
                status: IntegrationStatus::Available,
                settings: Default::default(),
            };
            if connected {
                integration.connect();
            }
            integration
        })
        .collect()
}

fn seed_talent_pool() -> Vec<TalentPoolMember> {
    vec![
        TalentPoolMember {
            id: Uuid::new_v4(),
            name: "Sarah Johnson".into(),
            email: "sarah.j@email.com".into(),
            title: "Senior Frontend Developer".into(),
            location: "San Francisco, CA".into(),
            experience: "5+ years".into(),
            skills: strings(&["React", "TypeScript", "Node.js", "AWS"]),
            tags: strings(&["top-performer-2024", "react-expert"]),
            last_active: date(2024, 7, 10),
            ai_score: 92,
            availability: Availability::Available,
            previous_applications: strings(&[
                "Frontend Developer at TechCorp",
                "React Developer at StartupX",
            ]),
        },
        TalentPoolMember {
            id: Uuid::new_v4(),
            name: "Michael Chen".into(),
            email: "m.chen@email.com".into(),
            title: "DevOps Engineer".into(),
            location: "Remote".into(),
            experience: "7+ years".into(),
            skills: strings(&["Kubernetes", "Docker", "AWS", "Python"]),
            tags: strings(&["kubernetes-expert", "remote-ready"]),
            last_active: date(2024, 7, 8),
            ai_score: 88,
            availability: Availability::Passive,
            previous_applications: strings(&["DevOps Engineer at CloudCorp"]),
        },
        TalentPoolMember {
            id: Uuid::new_v4(),
            name: "Emily Rodriguez".into(),
            email: "emily.r@email.com".into(),
            title: "UX Designer".into(),
            location: "New York, NY".into(),
            experience: "4+ years".into(),
            skills: strings(&["Figma", "User Research", "Prototyping", "Design Systems"]),
            tags: strings(&["design-system-expert", "user-research"]),
            last_active: date(2024, 7, 12),
            ai_score: 85,
            availability: Availability::Available,
            previous_applications: strings(&[
                "UX Designer at DesignStudio",
                "Product Designer at FinTech",
            ]),
        },
        TalentPoolMember {
            id: Uuid::new_v4(),
            name: "David Wilson".into(),
            email: "d.wilson@email.com".into(),
            title: "Data Scientist".into(),
            location: "Austin, TX".into(),
            experience: "6+ years".into(),
            skills: strings(&["Python", "Machine Learning", "SQL", "TensorFlow"]),
            tags: strings(&["ml-expert", "python-specialist"]),
            last_active: date(2024, 7, 5),
            ai_score: 90,
            availability: Availability::Passive,
            previous_applications: strings(&[
                "Data Scientist at DataCorp",
                "ML Engineer at AIStart",
            ]),
        },
    ]
}

fn seed_analytics() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        kpis: vec![
            Kpi {
                title: "Time to Hire".into(),
                value: "14 days".into(),
                change: "-2 days".into(),
                trend: Trend::Down,
                description: "Average time from application to offer".into(),
            },
            Kpi {
                title: "Cost per Hire".into(),
                value: "$3,250".into(),
                change: "-$450".into(),
                trend: Trend::Down,
                description: "Total recruitment cost per successful hire".into(),
            },
            Kpi {
                title: "Quality of Hire".into(),
                value: "4.2/5".into(),
                change: "+0.3".into(),
                trend: Trend::Up,
                description: "Based on 90-day performance reviews".into(),
            },
            Kpi {
                title: "Candidate Experience".into(),
                value: "4.5/5".into(),
                change: "+0.2".into(),
                trend: Trend::Up,
                description: "Average satisfaction score from candidates".into(),
            },
        ],
        sources: vec![
            SourceMetric {
                source: "LinkedIn".into(),
                applications: 145,
                hires: 12,
                cost: "$2,100".into(),
            },
            SourceMetric {
                source: "Indeed".into(),
                applications: 89,
                hires: 8,
                cost: "$1,200".into(),
            },
            SourceMetric {
                source: "Company Website".into(),
                applications: 67,
                hires: 15,
                cost: "$800".into(),
            },
            SourceMetric {
                source: "Employee Referrals".into(),
                applications: 34,
                hires: 18,
                cost: "$500".into(),
            },
            SourceMetric {
                source: "University Partnerships".into(),
                applications: 28,
                hires: 6,
                cost: "$1,500".into(),
            },
        ],
        funnel: vec![
            FunnelStage {
                stage: "Applications".into(),
                count: 520,
                percentage: 100,
            },
            FunnelStage {
                stage: "Screening".into(),
                count: 312,
                percentage: 60,
            },
            FunnelStage {
                stage: "Interviews".into(),
                count: 156,
                percentage: 30,
            },
            FunnelStage {
                stage: "Offers".into(),
                count: 78,
                percentage: 15,
            },
            FunnelStage {
                stage: "Hires".into(),
                count: 52,
                percentage: 10,
            },
        ],
        diversity: vec![
            DiversityMetric {
                metric: "Gender Diversity".into(),
                current: "48% Female".into(),
                target: "50%".into(),
                standing: DiversityStanding::OnTrack,
            },
            DiversityMetric {
                metric: "Ethnic Diversity".into(),
                current: "35% Minorities".into(),
                target: "40%".into(),
                standing: DiversityStanding::Behind,
            },
            DiversityMetric {
                metric: "Age Diversity".into(),
                current: "22% 35+ years".into(),
                target: "25%".into(),
                standing: DiversityStanding::OnTrack,
            },
            DiversityMetric {
                metric: "Education Diversity".into(),
                current: "15% Non-traditional".into(),
                target: "20%".into(),
                standing: DiversityStanding::Behind,
            },
        ],
    }
}

fn seed_video_interviews() -> Vec<VideoInterview> {
    let rows = [
        (
            "Alex Johnson",
            "Senior Developer",
            VideoInterviewKind::Recorded,
            date(2024, 7, 10),
            "15:32",
            VideoOutcome::Completed {
                ai_score: 85,
                sentiment: Sentiment::Positive,
            },
        ),
        (
            "Maria Garcia",
            "UX Designer",
            VideoInterviewKind::Live,
            date(2024, 7, 15),
            "30:00",
            VideoOutcome::Scheduled,
        ),
        (
            "David Chen",
            "Product Manager",
            VideoInterviewKind::Recorded,
            date(2024, 7, 8),
            "18:45",
            VideoOutcome::Completed {
                ai_score: 72,
                sentiment: Sentiment::Neutral,
            },
        ),
    ];

    rows.into_iter()
        .map(|(name, position, kind, date, duration, outcome)| VideoInterview {
            id: Uuid::new_v4(),
            candidate_name: name.to_string(),
            initials: text::initials(name),
            position: position.to_string(),
            kind,
            date,
            duration: duration.to_string(),
            outcome,
        })
        .collect()
}

fn seed_video_insights(interviews: &[VideoInterview]) -> HashMap<Uuid, VideoInsights> {
    // Insights exist only for completed analyses.
    interviews
        .iter()
        .filter(|interview| matches!(interview.outcome, VideoOutcome::Completed { .. }))
        .map(|interview| {
            (
                interview.id,
                VideoInsights {
                    sentiment_timeline: vec![
                        SentimentPoint {
                            time: "0:00".into(),
                            sentiment: Sentiment::Neutral,
                        },
                        SentimentPoint {
                            time: "2:30".into(),
                            sentiment: Sentiment::Positive,
                        },
                        SentimentPoint {
                            time: "5:00".into(),
                            sentiment: Sentiment::Positive,
                        },
                        SentimentPoint {
                            time: "8:15".into(),
                            sentiment: Sentiment::Neutral,
                        },
                        SentimentPoint {
                            time: "12:00".into(),
                            sentiment: Sentiment::Positive,
                        },
                        SentimentPoint {
                            time: "15:32".into(),
                            sentiment: Sentiment::Positive,
                        },
                    ],
                    behavioral_metrics: BehavioralMetrics {
                        confidence: 78,
                        clarity: 85,
                        enthusiasm: 82,
                    },
                    keywords: strings(&[
                        "React",
                        "Node.js",
                        "Team leadership",
                        "Agile",
                        "Problem solving",
                    ]),
                },
            )
        })
        .collect()
}

fn seed_features() -> Vec<FeaturePage> {
    let rows = [
        (
            "executive-search",
            "Executive Search",
            "Comprehensive C-suite recruitment services for leadership positions",
            [
                ("Targeted Search Strategy", "Structured mapping of the leadership market for each mandate."),
                ("Executive Network Access", "Direct reach into senior talent communities across industries."),
                ("Rigorous Assessment", "Multi-stage evaluation covering track record and leadership style."),
            ],
        ),
        (
            "talent-analytics",
            "Talent Analytics",
            "Data-driven insights for workforce planning and strategic talent decisions",
            [
                ("Performance Insights", "Hiring funnel and quality-of-hire reporting out of the box."),
                ("Market Intelligence", "Compensation and availability benchmarks by role and region."),
                ("ROI Measurement", "Cost and conversion tracking per sourcing channel."),
            ],
        ),
        (
            "interview-management",
            "Interview Management",
            "Streamlined interview scheduling and candidate assessment systems",
            [
                ("Efficient Scheduling", "Coordinated calendars for panels and candidates."),
                ("Structured Assessment", "Consistent scorecards across every interview loop."),
                ("Faster Decision Making", "Consolidated feedback the moment a loop closes."),
            ],
        ),
        (
            "candidate-assessment",
            "Candidate Assessment",
            "Comprehensive evaluation tools including psychometric testing and skill assessments",
            [
                ("Comprehensive Evaluation", "Technical, aptitude and portfolio formats in one place."),
                ("Predictive Insights", "Signal extraction from assessment performance."),
                ("Cultural Fit Analysis", "Values alignment alongside raw capability."),
            ],
        ),
    ];

    rows.into_iter()
        .map(|(slug, title, subtitle, sections)| FeaturePage {
            slug: slug.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            sections: sections
                .into_iter()
                .map(|(section_title, body)| FeatureSection {
                    title: section_title.to_string(),
                    body: body.to_string(),
                })
                .collect(),
        })
        .collect()
}

fn seed_help_categories() -> Vec<HelpCategory> {
    vec![
        HelpCategory {
            slug: "getting-started".into(),
            title: "Getting Started".into(),
            description: "Learn the basics of working with our executive search process.".into(),
            articles: strings(&[
                "How to submit a job requirement",
                "Understanding our executive search timeline",
                "What information do I need to provide for a search?",
                "Setting up your client account",
            ]),
        },
        HelpCategory {
            slug: "executive-search".into(),
            title: "Executive Search".into(),
            description: "Everything you need to know about our C-suite and leadership recruitment services.".into(),
            articles: strings(&[
                "Executive search process overview",
                "Leadership assessment criteria",
                "Search timeline expectations",
                "Candidate evaluation process",
            ]),
        },
        HelpCategory {
            slug: "interview-process".into(),
            title: "Interview Process".into(),
            description: "Information about our interview scheduling, assessment, and feedback processes.".into(),
            articles: strings(&[
                "Setting up interview schedules",
                "Interview coordination process",
                "Providing candidate feedback",
            ]),
        },
    ]
}

fn seed_help_articles() -> Vec<HelpArticle> {
    vec![
        HelpArticle {
            slug: "how-to-submit-a-job-requirement".into(),
            title: "How to submit a job requirement".into(),
            category: "getting-started".into(),
            body: "Open the Jobs screen, start a new posting and complete the three wizard steps: role details, description, and distribution channels. Publishing makes the posting visible to the configured channels.".into(),
        },
        HelpArticle {
            slug: "understanding-our-executive-search-timeline".into(),
            title: "Understanding our executive search timeline".into(),
            category: "getting-started".into(),
            body: "A typical search runs in weekly stages: intake, market mapping, outreach, interviews, and offer. Your dashboard shows where each mandate currently sits.".into(),
        },
    ]
}
