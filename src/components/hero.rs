use yew::prelude::*;

use crate::nav::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let explore_projects = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Projects))
    };
    let meet_founder = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::About))
    };

    html! {
        <section id="home" class="hero-section">
            <style>
                {r#"
                .hero-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                    background: radial-gradient(circle at 50% 30%, rgba(126, 178, 255, 0.12), transparent 60%), #11151b;
                }
                .hero-content { max-width: 900px; }
                .hero-badge {
                    width: 80px;
                    height: 80px;
                    margin: 0 auto 2rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #7EB2FF, #4169E1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.2rem;
                    animation: glow 3s ease-in-out infinite;
                }
                @keyframes glow {
                    0%, 100% { box-shadow: 0 0 20px rgba(126, 178, 255, 0.4); }
                    50% { box-shadow: 0 0 45px rgba(126, 178, 255, 0.8); }
                }
                .hero-content h1 {
                    font-size: clamp(2.5rem, 7vw, 4.5rem);
                    color: #fff;
                    margin-bottom: 1.5rem;
                    line-height: 1.1;
                }
                .hero-content h1 span {
                    background: linear-gradient(45deg, #7EB2FF, #4169E1);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.3rem;
                    color: rgba(255, 255, 255, 0.75);
                    max-width: 640px;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }
                .hero-ctas {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-bottom: 4rem;
                }
                .cta-primary {
                    background: linear-gradient(45deg, #7EB2FF, #4169E1);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 1rem 2rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .cta-primary:hover { box-shadow: 0 4px 24px rgba(126, 178, 255, 0.4); }
                .cta-secondary {
                    background: transparent;
                    color: #7EB2FF;
                    border: 1px solid #7EB2FF;
                    border-radius: 999px;
                    padding: 1rem 2rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .cta-secondary:hover { background: rgba(126, 178, 255, 0.1); }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .hero-stats .stat-value {
                    font-size: 1.9rem;
                    font-weight: 700;
                    color: #7EB2FF;
                }
                .hero-stats .stat-label {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                @media (max-width: 768px) {
                    .hero-stats { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
            <div class="hero-content">
                <div class="hero-badge">{"⚡"}</div>
                <h1>{"From Problem to "}<span>{"Prototype"}</span></h1>
                <p class="hero-subtitle">
                    {"Student-led engineering solutions tackling real-world challenges \
                      through innovative design and sustainable technology."}
                </p>
                <div class="hero-ctas">
                    <button class="cta-primary" onclick={explore_projects}>
                        {"Explore Projects →"}
                    </button>
                    <button class="cta-secondary" onclick={meet_founder}>
                        {"Meet the Founder"}
                    </button>
                </div>
                <div class="hero-stats">
                    <div>
                        <div class="stat-value">{"5+"}</div>
                        <div class="stat-label">{"Active Projects"}</div>
                    </div>
                    <div>
                        <div class="stat-value">{"3"}</div>
                        <div class="stat-label">{"Prototypes Built"}</div>
                    </div>
                    <div>
                        <div class="stat-value">{"100%"}</div>
                        <div class="stat-label">{"Open Source"}</div>
                    </div>
                    <div>
                        <div class="stat-value">{"2024"}</div>
                        <div class="stat-label">{"Founded"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
