use yew::prelude::*;

use crate::nav::Section;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Contact))
    };

    html! {
        <section id="about" class="about-section">
            <style>
                {r#"
                .about-section {
                    padding: 6rem 2rem;
                    background: #181d24;
                }
                .about-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: auto 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .founder-portrait {
                    width: 280px;
                    height: 280px;
                    border-radius: 50%;
                    background: linear-gradient(135deg, rgba(126, 178, 255, 0.25), rgba(65, 105, 225, 0.25));
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .founder-portrait .initials {
                    width: 250px;
                    height: 250px;
                    border-radius: 50%;
                    background: #11151b;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 4rem;
                    font-weight: 700;
                    color: #7EB2FF;
                }
                .about-text h2 { font-size: 2.5rem; color: #fff; margin-bottom: 0.5rem; }
                .about-text h2 span { color: #7EB2FF; }
                .about-text h3 { font-size: 1.4rem; color: rgba(255, 255, 255, 0.85); margin-bottom: 1.5rem; }
                .about-text p {
                    color: rgba(255, 255, 255, 0.65);
                    font-size: 1.05rem;
                    line-height: 1.7;
                    margin-bottom: 1.25rem;
                }
                .value-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.25rem;
                    margin: 2rem 0;
                }
                .value-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(126, 178, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem 1rem;
                    text-align: center;
                }
                .value-card .value-icon { font-size: 1.6rem; margin-bottom: 0.5rem; }
                .value-card h4 { color: #fff; margin: 0 0 0.4rem; }
                .value-card p { font-size: 0.85rem; margin: 0; color: rgba(255, 255, 255, 0.55); }
                .about-cta {
                    background: linear-gradient(45deg, #7EB2FF, #4169E1);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.9rem 2rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                @media (max-width: 900px) {
                    .about-grid { grid-template-columns: 1fr; justify-items: center; text-align: center; }
                    .value-cards { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="about-grid">
                <div class="founder-portrait">
                    <div class="initials">{"VC"}</div>
                </div>
                <div class="about-text">
                    <h2>{"Meet the "}<span>{"Founder"}</span></h2>
                    <h3>{"Vivaan Chadha"}</h3>
                    <p>
                        {"I'm a passionate student engineer dedicated to transforming real-world \
                          challenges into innovative, sustainable solutions. The Ingenium Project \
                          represents my commitment to creating low-cost, high-impact engineering \
                          solutions that can make a meaningful difference in our communities and \
                          environment."}
                    </p>
                    <p>
                        {"From urban noise pollution to sustainable farming practices, I believe \
                          that with the right approach and determination, we can engineer solutions \
                          that address some of our most pressing challenges."}
                    </p>
                    <div class="value-cards">
                        <div class="value-card">
                            <div class="value-icon">{"🎯"}</div>
                            <h4>{"Innovation"}</h4>
                            <p>{"Creative solutions to complex problems"}</p>
                        </div>
                        <div class="value-card">
                            <div class="value-icon">{"🏆"}</div>
                            <h4>{"Impact"}</h4>
                            <p>{"Meaningful change through engineering"}</p>
                        </div>
                        <div class="value-card">
                            <div class="value-icon">{"🤝"}</div>
                            <h4>{"Collaboration"}</h4>
                            <p>{"Building solutions together"}</p>
                        </div>
                    </div>
                    <button class="about-cta" onclick={to_contact}>
                        {"Let's Collaborate"}
                    </button>
                </div>
            </div>
        </section>
    }
}
