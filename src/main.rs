use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod nav;
mod inquiry {
    pub mod delivery;
    pub mod form;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod projects;
}

use components::{about::About, contact::ContactSection, hero::Hero, projects::Projects};
use nav::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav_bar(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let scroll_callback = Closure::wrap(Box::new({
                    let window = window.clone();
                    move || {
                        if let Ok(scroll_y) = window.scroll_y() {
                            is_scrolled.set(scroll_y > 50.0);
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_navigate.emit(section);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                }
                .top-nav.scrolled {
                    background: rgba(17, 21, 27, 0.95);
                    backdrop-filter: blur(10px);
                    border-bottom-color: rgba(126, 178, 255, 0.2);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #7EB2FF;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0;
                }
                .nav-links { display: flex; gap: 2rem; }
                .nav-links button {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 1rem;
                    cursor: pointer;
                    padding: 0;
                    transition: color 0.2s ease;
                }
                .nav-links button:hover { color: #7EB2FF; }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    flex-direction: column;
                    gap: 5px;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: rgba(255, 255, 255, 0.85);
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem 2rem;
                        background: rgba(17, 21, 27, 0.97);
                        backdrop-filter: blur(10px);
                    }
                    .nav-links.mobile-menu-open { display: flex; }
                    .nav-links button { text-align: left; }
                }
                "#}
            </style>
            <div class="nav-content">
                <button class="nav-logo" onclick={nav_link(Section::Home)}>
                    {"The Ingenium Project"}
                </button>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for Section::ALL.iter().map(|section| html! {
                            <button onclick={nav_link(*section)}>{section.label()}</button>
                        })
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let on_navigate = Callback::from(nav::scroll_to);

    html! {
        <>
            <style>
                {r#"
                .site-footer {
                    padding: 2rem;
                    text-align: center;
                    background: #11151b;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.85rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                }
                "#}
            </style>
            <Nav on_navigate={on_navigate.clone()} />
            <main>
                <Hero on_navigate={on_navigate.clone()} />
                <About on_navigate={on_navigate} />
                <Projects />
                <ContactSection delivery={config::delivery()} />
            </main>
            <footer class="site-footer">
                {"The Ingenium Project — student-led engineering for real-world impact."}
            </footer>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
