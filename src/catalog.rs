//! Static Catalogs
//!
//! Hard-coded page content and the project subset selection.

use crate::models::{ContactKind, ContactLink, ExperienceEntry, ProficiencyEntry, ProjectRecord, SkillGroup};
use crate::state::ViewState;

pub const OWNER_NAME: &str = "Hong JeongJun";
pub const OWNER_TITLE: &str = "Full-Stack Software Engineer";
pub const CONTACT_EMAIL: &str = "hjj5946@gmail.com";

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "pickstudy",
        name: "PickStudy",
        description: "학원/학생/학부모를 위한 통합 관리 서비스. 학원용 앱, 학부모용 앱, 관리 웹을 포함.",
        techs: &["Kotlin", "Jetpack Compose", "FastAPI", "PostgreSQL"],
        achievement: Some("실서비스 운영 중, 출결·알림 흐름을 하나의 구조로 통합"),
        link: None,
    },
    ProjectRecord {
        id: "j-gamebox",
        name: "J GameBox",
        description: "웹 기반 미니 게임 포털. 주사위, 룰렛, 사다리 등 간단한 게임 모음.",
        techs: &["React", "TypeScript", "Vite", "Tailwind"],
        achievement: None,
        link: Some("https://example.com"),
    },
    ProjectRecord {
        id: "academy-admin",
        name: "Academy Admin Web",
        description: "학원 운영자를 위한 관리 웹. 수강생, 반 편성, 수납 내역을 한 화면에서 관리.",
        techs: &["React", "TypeScript", "FastAPI"],
        achievement: Some("반복 수작업 정리 시간을 크게 단축"),
        link: None,
    },
    ProjectRecord {
        id: "notify-gateway",
        name: "Notification Gateway",
        description: "앱 푸시, 문자, 알림톡 발송을 하나의 큐로 묶은 알림 서버.",
        techs: &["Python", "RabbitMQ", "Redis", "Docker"],
        achievement: None,
        link: None,
    },
    ProjectRecord {
        id: "portfolio",
        name: "Portfolio",
        description: "지금 보고 계신 포트폴리오 페이지. 라이트/다크 테마와 프로젝트 전체 보기 지원.",
        techs: &["Rust", "Leptos", "Tailwind CSS"],
        achievement: None,
        link: Some("https://github.com/hjj5946-upply"),
    },
    ProjectRecord {
        id: "internal-tools",
        name: "Internal Ops Tools",
        description: "사내 운영 도구 모음. 권한 관리와 배포 자동화 스크립트 포함.",
        techs: &["C# (ASP.NET)", "MSSQL", "Jenkins"],
        achievement: None,
        link: None,
    },
];

/// Chart data, in display order
pub const PROFICIENCY: &[ProficiencyEntry] = &[
    ProficiencyEntry { category: "Backend", score: 85 },
    ProficiencyEntry { category: "Frontend", score: 70 },
    ProficiencyEntry { category: "Mobile", score: 60 },
    ProficiencyEntry { category: "DevOps", score: 50 },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        label: "Backend / API",
        items: &["Java (Spring Boot)", "Python (FastAPI)", "C# (ASP.NET)", "RabbitMQ", "Kafka"],
    },
    SkillGroup {
        label: "Frontend / UI",
        items: &["React", "TypeScript", "Vite", "Tailwind CSS", "GSAP"],
    },
    SkillGroup {
        label: "Mobile",
        items: &["Android (Kotlin, Jetpack Compose)"],
    },
    SkillGroup {
        label: "Infra / DevOps",
        items: &["AWS (EC2, ECS, RDS)", "Docker", "Jenkins", "CI/CD"],
    },
    SkillGroup {
        label: "Data / Storage",
        items: &["PostgreSQL", "MySQL", "MSSQL", "MariaDB", "Redis"],
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        period: "2023 — 현재",
        role: "EdTech 서비스 개발자",
        org: "학원/교육 플랫폼",
        bullets: &[
            "학원, 학부모, 학생을 연결하는 통합 서비스의 앱·웹·백엔드 개발 전반을 담당.",
            "Android(Kotlin, Jetpack Compose)와 FastAPI, PostgreSQL 기반의 서비스 설계 및 구현.",
            "실제 운영 환경에서 기능 개선, 성능 튜닝, 장애 대응 등을 경험.",
        ],
    },
    ExperienceEntry {
        period: "이전",
        role: "웹/백엔드 개발자",
        org: "웹 서비스 및 내부 시스템",
        bullets: &[
            "내부 운영 도구 및 웹 서비스 개발, 유지보수 경험.",
            "REST API 설계, 인증/인가, 간단한 배포 자동화 등 다양한 백엔드 실무를 수행.",
        ],
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink { kind: ContactKind::GitHub, href: "https://github.com/hjj5946-upply", label: "GitHub" },
    ContactLink { kind: ContactKind::Instagram, href: "https://www.instagram.com/h_j_jjjjjjjjjj/", label: "Instagram" },
    ContactLink { kind: ContactKind::Notion, href: "https://your-notion-url", label: "Notion" },
    ContactLink { kind: ContactKind::Email, href: "mailto:hjj5946@gmail.com", label: "Email" },
];

/// Section anchors, in page order (nav is hidden for now)
pub const SECTION_ANCHORS: &[(&str, &str)] = &[
    ("summary", "Summary"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Projects to render for a view; always a prefix of the catalog
pub fn visible_projects(view: ViewState, summary_count: usize) -> &'static [ProjectRecord] {
    select_projects(PROJECTS, view, summary_count)
}

pub fn select_projects<T>(catalog: &[T], view: ViewState, summary_count: usize) -> &[T] {
    match view {
        ViewState::Home => &catalog[..summary_count.min(catalog.len())],
        ViewState::FullProjectList => catalog,
    }
}
