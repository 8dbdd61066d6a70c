use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::inquiry::delivery::Delivery;
use crate::inquiry::form::{settle, CollaborationType, Field, InquiryForm, Notice};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    /// Delivery strategy this build ships with; see `config::delivery`.
    pub delivery: Delivery,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let form = use_state(InquiryForm::default);
    let submitting = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    // Outcome banners dismiss themselves after a few seconds.
    {
        let notice_setter = notice.clone();
        use_effect_with_deps(
            move |current: &Option<Notice>| {
                if current.is_some() {
                    Timeout::new(6_000, move || notice_setter.set(None)).forget();
                }
                || ()
            },
            *notice,
        );
    }

    let on_text = {
        let form = form.clone();
        move |field: Field| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*form).clone();
                next.set(field, input.value());
                form.set(next);
            })
        }
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(Field::Message, input.value());
            form.set(next);
        })
    };

    let on_collaboration_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(Field::CollaborationType, select.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let notice = notice.clone();
        let delivery = props.delivery.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // The button is disabled while a submission is in flight, but a
            // second Enter-key submit can still race the rerender.
            if *submitting {
                return;
            }
            submitting.set(true);
            notice.set(None);

            let snapshot = (*form).clone();
            let form = form.clone();
            let submitting = submitting.clone();
            let notice = notice.clone();
            let delivery = delivery.clone();
            spawn_local(async move {
                let delivered = match delivery.send(&snapshot).await {
                    Ok(()) => true,
                    Err(error) => {
                        log!("Delivery failed:", error.to_string());
                        false
                    }
                };
                let (next, outcome) = settle(snapshot, delivered);
                form.set(next);
                notice.set(Some(outcome));
                submitting.set(false);
            });
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                .contact-section {
                    padding: 6rem 2rem;
                    background: #181d24;
                }
                .contact-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-intro h2 {
                    font-size: 2.5rem;
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .contact-intro h2 span { color: #7EB2FF; }
                .contact-intro > p {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.1rem;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .contact-method {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .contact-method .method-icon {
                    width: 48px;
                    height: 48px;
                    flex-shrink: 0;
                    border-radius: 10px;
                    background: rgba(126, 178, 255, 0.15);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.3rem;
                }
                .contact-method h3 { color: #fff; margin: 0 0 0.25rem; }
                .contact-method p { color: rgba(255, 255, 255, 0.6); margin: 0; }
                .contact-method .method-note {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.4);
                }
                .looking-for {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(126, 178, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                .looking-for h3 { color: #fff; margin-top: 0; }
                .looking-for ul {
                    margin: 0;
                    padding-left: 1.2rem;
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.9;
                }
                .contact-form {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(126, 178, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .contact-form .field-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .contact-form label {
                    display: block;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.9rem;
                    margin-bottom: 0.4rem;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    background: #181d24;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    color: #fff;
                    font-size: 1rem;
                }
                .contact-form textarea { resize: none; }
                .submit-button {
                    background: linear-gradient(45deg, #7EB2FF, #4169E1);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .submit-button:disabled {
                    opacity: 0.5;
                    cursor: wait;
                }
                .loading-spinner {
                    display: inline-block;
                    width: 18px;
                    height: 18px;
                    border: 3px solid rgba(255, 255, 255, 0.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .notice {
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    font-size: 0.95rem;
                }
                .notice.sent {
                    background: rgba(76, 175, 80, 0.15);
                    border: 1px solid rgba(76, 175, 80, 0.4);
                    color: #8fdf92;
                }
                .notice.failed {
                    background: rgba(244, 67, 54, 0.15);
                    border: 1px solid rgba(244, 67, 54, 0.4);
                    color: #ff9b93;
                }
                @media (max-width: 768px) {
                    .contact-grid { grid-template-columns: 1fr; }
                    .contact-form .field-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="contact-grid">
                <div class="contact-intro">
                    <h2>{"Let's "}<span>{"Collaborate"}</span></h2>
                    <p>
                        {"Ready to tackle engineering challenges together? Whether you're a mentor, \
                          fellow innovator, or potential sponsor, I'd love to hear from you."}
                    </p>
                    <div class="contact-method">
                        <div class="method-icon">{"✉"}</div>
                        <div>
                            <h3>{"Email"}</h3>
                            <p>{config::CONTACT_EMAIL}</p>
                            <p class="method-note">{"Best for detailed discussion"}</p>
                        </div>
                    </div>
                    <div class="contact-method">
                        <div class="method-icon">{"⚡"}</div>
                        <div>
                            <h3>{"Quick Response"}</h3>
                            <p>{"Typically within 24 h"}</p>
                            <p class="method-note">{"For time-sensitive queries"}</p>
                        </div>
                    </div>
                    <div class="looking-for">
                        <h3>{"Looking for:"}</h3>
                        <ul>
                            <li>{"Technical mentors & advisors"}</li>
                            <li>{"Student collaborators"}</li>
                            <li>{"Sponsors & funding partners"}</li>
                            <li>{"Industry connections"}</li>
                        </ul>
                    </div>
                </div>
                <form class="contact-form" onsubmit={onsubmit}>
                    {
                        if let Some(outcome) = *notice {
                            let class = match outcome {
                                Notice::Sent => "notice sent",
                                Notice::Failed => "notice failed",
                            };
                            html! { <div class={class}>{outcome.message()}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="field-row">
                        <div>
                            <label for="contact-name">{"Your Name"}</label>
                            <input
                                id="contact-name"
                                type="text"
                                placeholder="Jane Doe"
                                required={true}
                                value={form.name.clone()}
                                oninput={on_text(Field::Name)}
                            />
                        </div>
                        <div>
                            <label for="contact-email">{"Email Address"}</label>
                            <input
                                id="contact-email"
                                type="email"
                                placeholder="you@example.com"
                                required={true}
                                value={form.email.clone()}
                                oninput={on_text(Field::Email)}
                            />
                        </div>
                    </div>
                    <div>
                        <label for="contact-type">{"Collaboration Type"}</label>
                        <select id="contact-type" onchange={on_collaboration_type}>
                            {
                                for CollaborationType::ALL.iter().map(|option| html! {
                                    <option
                                        value={option.value()}
                                        selected={*option == form.collaboration_type}
                                    >
                                        {option.label()}
                                    </option>
                                })
                            }
                        </select>
                    </div>
                    <div>
                        <label for="contact-subject">{"Subject"}</label>
                        <input
                            id="contact-subject"
                            type="text"
                            placeholder="What's this about?"
                            required={true}
                            value={form.subject.clone()}
                            oninput={on_text(Field::Subject)}
                        />
                    </div>
                    <div>
                        <label for="contact-message">{"Message"}</label>
                        <textarea
                            id="contact-message"
                            rows="5"
                            placeholder="Tell me about your idea..."
                            required={true}
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                    </div>
                    <button type="submit" class="submit-button" disabled={*submitting}>
                        {
                            if *submitting {
                                html! { <><span class="loading-spinner"></span>{"Sending..."}</> }
                            } else {
                                html! { <>{"Send Message"}<span>{"→"}</span></> }
                            }
                        }
                    </button>
                </form>
            </div>
        </section>
    }
}
