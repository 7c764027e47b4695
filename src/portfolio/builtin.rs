use crate::browser::proficiency::ProficiencyTable;

use super::{Portfolio, Project, SkillCatalog, SkillCategory};

fn categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory::new(
            "CI/CD",
            "code",
            ["Jenkins", "GitLab CI", "GitHub Actions", "Azure Pipelines"],
        ),
        SkillCategory::new("Cloud", "cloud", ["AWS", "Azure"]),
        SkillCategory::new("Containers", "server", ["Docker", "ACR", "ECR"]),
        SkillCategory::new("Orchestration", "server", ["Kubernetes", "AKS", "EKS"]),
        SkillCategory::new("IaC", "activity", ["Terraform", "Ansible"]),
        SkillCategory::new("Monitoring", "activity", ["Prometheus", "Grafana"]),
        SkillCategory::new("Scripting", "code", ["Python", "Bash", "PowerShell", "Go"]),
        SkillCategory::new("System Administration", "code", ["Linux", "Windows"]),
    ]
}

const LEVELS: &[(&str, u8)] = &[
    ("Jenkins", 5),
    ("Docker", 5),
    ("Kubernetes", 5),
    ("AWS", 5),
    ("Terraform", 4),
    ("Python", 4),
    ("Bash", 5),
    ("Azure", 4),
    ("Git", 5),
    ("Linux", 5),
    ("Ansible", 4),
    ("Prometheus", 4),
    ("Grafana", 4),
    ("ELK", 4),
];

const FEATURED: &[&str] = &["Kubernetes", "AWS", "Docker", "Terraform", "Jenkins"];

fn project(
    title: &str,
    description: &str,
    tech: &[&str],
    metrics: &[&str],
    repository: &str,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(ToString::to_string).collect(),
        metrics: metrics.iter().map(ToString::to_string).collect(),
        repository: Some(repository.to_string()),
    }
}

fn projects() -> Vec<Project> {
    vec![
        project(
            "DevOps Portfolio Website",
            "Modern, responsive portfolio website built with React + Vite showcasing DevOps expertise, certifications, and technical projects with stunning animations and interactive UI",
            &["React", "Vite", "Tailwind CSS", "Framer Motion", "shadcn/ui"],
            &[
                "100% responsive design",
                "Modern UI/UX",
                "Deployed on GitHub Pages",
            ],
            "https://github.com/Chandruthelinesmasher/DEVOPS-PORTFOLIO-WEBSITE",
        ),
        project(
            "Production-Grade Kubernetes Deployment on AKS",
            "Designed and deployed a production-ready e-commerce application on Azure Kubernetes Service (AKS) with automated CI/CD, containerized workloads, and scalable infrastructure.",
            &[
                "AKS",
                "Kubernetes",
                "Docker",
                "Terraform",
                "GitHub Actions",
                "Helm",
                "Prometheus",
            ],
            &[
                "Automated CI/CD",
                "Zero-downtime rolling updates",
                "HPA enabled",
                "Production monitoring",
            ],
            "https://github.com/Chandruthelinesmasher/chandru-ecommerce-AKS",
        ),
        project(
            "Secure Cloud DevSecOps",
            "Built a secure cloud-native CI/CD pipeline with integrated security scanning, policy enforcement, and automated infrastructure provisioning following DevSecOps best practices.",
            &[
                "Docker",
                "Terraform",
                "GitHub Actions",
                "Trivy",
                "OWASP Dependency-Check",
                "Azure",
                "Kubernetes",
                "SonarQube",
            ],
            &[
                "Shift-left security with automated scans",
                "Secrets & vulnerabilities detected before deployment",
                "End-to-end CI/CD with security gates",
                "Production-ready DevSecOps workflow",
            ],
            "https://github.com/Chandruthelinesmasher/secure-cloud-devsecops",
        ),
        project(
            "Production Monitoring, Alert & K8S",
            "Designed and implemented a production-grade Kubernetes monitoring, alerting, and auto-healing system on AKS using fully automated IaC and CI/CD pipelines.",
            &[
                "Kubernetes (AKS)",
                "Terraform",
                "GitHub Actions",
                "Azure Container Registry (ACR)",
                "Prometheus",
                "Grafana",
                "Alertmanager",
                "Docker",
            ],
            &[
                "100% automated AKS infra provisioning",
                "Real-time metrics & dashboards",
                "Auto-healing via HPA & Kubernetes self-recovery",
                "Zero manual deployment steps",
                "Production-ready SRE architecture",
            ],
            "https://github.com/Chandruthelinesmasher/Production-Monitoring-Alerting-Auto-Healing-on-Kubernetes",
        ),
    ]
}

pub(super) fn portfolio() -> Portfolio {
    // The built-in data is fixed; a validation failure here is a programming error.
    let catalog = SkillCatalog::new(categories()).expect("built-in catalog is valid");
    let proficiency =
        ProficiencyTable::new(LEVELS.iter().copied()).expect("built-in levels are in range");

    Portfolio {
        catalog,
        proficiency,
        featured: FEATURED.iter().map(ToString::to_string).collect(),
        projects: projects(),
    }
}
