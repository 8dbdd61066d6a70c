use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Concept,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Concept => "Concept",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "status completed",
            ProjectStatus::InProgress => "status in-progress",
            ProjectStatus::Concept => "status concept",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
    pub icon: &'static str,
    pub tags: &'static [&'static str],
    pub impact: &'static str,
}

/// The showcase is static content; every card renders from this array.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "noise-mapping",
            title: "Urban Noise Mapping with UAVs",
            description: "Drone-mounted sensors to map real-time urban noise and inform policy decisions.",
            status: ProjectStatus::Completed,
            icon: "🛩",
            tags: &["UAV", "IoT", "Environmental", "Data Analytics"],
            impact: "Real-time urban noise monitoring for 10+ city blocks",
        },
        Project {
            id: "aqi-display",
            title: "Smart AQI Display System",
            description: "Solar-powered air quality monitors for schools and public spaces with live displays.",
            status: ProjectStatus::Completed,
            icon: "🌬",
            tags: &["IoT", "Solar", "Public Health", "Display Systems"],
            impact: "Deployed in 5 schools, monitoring air quality for 2000+ students",
        },
        Project {
            id: "tlud-cookstove",
            title: "TLUD Cookstove Solution",
            description: "Clean-burning biomass stove that produces biochar instead of harmful smoke.",
            status: ProjectStatus::Completed,
            icon: "🔥",
            tags: &["Biomass", "Agriculture", "Clean Energy", "Sustainability"],
            impact: "Reduced smoke emissions by 90%, produces 2kg biochar daily",
        },
        Project {
            id: "drone-farming",
            title: "Drone-Assisted Sustainable Farming",
            description: "Precision pesticide-free farming using advanced UAV technology in Punjab.",
            status: ProjectStatus::InProgress,
            icon: "🌱",
            tags: &["Precision Agriculture", "Computer Vision", "Sustainability", "UAV"],
            impact: "Target: 100 acres pesticide-free farming coverage",
        },
        Project {
            id: "pollution-streetlights",
            title: "Pollution-Mitigating Streetlights",
            description: "Streetlight-based mist systems to reduce dust and particulate matter exposure.",
            status: ProjectStatus::Concept,
            icon: "⚡",
            tags: &["Smart Cities", "Air Purification", "Infrastructure", "IoT"],
            impact: "Potential: 30% reduction in local particulate matter",
        },
    ]
}

#[function_component(Projects)]
pub fn project_grid() -> Html {
    html! {
        <section id="projects" class="projects-section">
            <style>
                {r#"
                .projects-section {
                    padding: 6rem 2rem;
                    background: #11151b;
                }
                .projects-header {
                    max-width: 1100px;
                    margin: 0 auto 3rem;
                    text-align: center;
                }
                .projects-header h2 { font-size: 2.5rem; color: #fff; margin-bottom: 0.75rem; }
                .projects-header h2 span { color: #7EB2FF; }
                .projects-header p { color: rgba(255, 255, 255, 0.6); font-size: 1.1rem; }
                .project-cards {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 1.5rem;
                }
                .project-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(126, 178, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.75rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.9rem;
                    transition: border-color 0.2s ease;
                }
                .project-card:hover { border-color: rgba(126, 178, 255, 0.4); }
                .card-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .card-top .project-icon { font-size: 1.8rem; }
                .status {
                    font-size: 0.8rem;
                    font-weight: 600;
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                }
                .status.completed { color: #8fdf92; background: rgba(76, 175, 80, 0.15); }
                .status.in-progress { color: #ffd54f; background: rgba(255, 193, 7, 0.15); }
                .status.concept { color: #7EB2FF; background: rgba(126, 178, 255, 0.15); }
                .project-card h3 { color: #fff; margin: 0; font-size: 1.2rem; }
                .project-card > p { color: rgba(255, 255, 255, 0.65); margin: 0; line-height: 1.6; }
                .project-tags { display: flex; flex-wrap: wrap; gap: 0.4rem; }
                .project-tags span {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                    background: rgba(255, 255, 255, 0.06);
                    border-radius: 999px;
                    padding: 0.2rem 0.6rem;
                }
                .project-impact {
                    margin-top: auto;
                    font-size: 0.85rem;
                    color: rgba(126, 178, 255, 0.9);
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    padding-top: 0.9rem;
                }
                "#}
            </style>
            <div class="projects-header">
                <h2>{"Current "}<span>{"Projects"}</span></h2>
                <p>{"Engineering solutions in flight, from field-tested prototypes to early concepts."}</p>
            </div>
            <div class="project-cards">
                {
                    for projects().into_iter().map(|project| html! {
                        <div class="project-card" key={project.id}>
                            <div class="card-top">
                                <span class="project-icon">{project.icon}</span>
                                <span class={project.status.class()}>{project.status.label()}</span>
                            </div>
                            <h3>{project.title}</h3>
                            <p>{project.description}</p>
                            <div class="project-tags">
                                { for project.tags.iter().map(|tag| html! { <span>{*tag}</span> }) }
                            </div>
                            <div class="project-impact">{project.impact}</div>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_has_five_projects_with_unique_ids() {
        let all = projects();
        assert_eq!(all.len(), 5);
        for (i, project) in all.iter().enumerate() {
            assert!(!all[i + 1..].iter().any(|other| other.id == project.id));
            assert!(!project.tags.is_empty());
        }
    }
}
