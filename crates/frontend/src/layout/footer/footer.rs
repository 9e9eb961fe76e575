use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::api_url;
use crate::shared::date_utils::current_year;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Online orders: open",
            ServerStatus::Offline => "Online orders: unavailable",
            ServerStatus::Checking => "Online orders: checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // One health check per mount
    Effect::new(move |_| {
        spawn_local(async move {
            let online = ping_server().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    view! {
        <footer data-zone="footer" class="site-footer">
            <div class="site-footer__columns">
                <div>
                    <h4>"Chai Bisket"</h4>
                    <p>"Irani chai, Osmania biscuits and Hyderabadi street food."</p>
                </div>
                <div>
                    <h4>"Visit"</h4>
                    <p>"911 Market Pl Blvd, Suite L, Cumming, GA 30041"</p>
                    <p>"Phone: (770) 555-0123"</p>
                </div>
                <div>
                    <h4>"Explore"</h4>
                    <a href="/#menu">"Menu"</a>
                    <a href="/#story">"Our Story"</a>
                    <a href="/#contact">"Catering"</a>
                </div>
            </div>
            <div class="site-footer__bar">
                <span>{format!("© {} Chai Bisket. All rights reserved.", current_year())}</span>
                <span class=move || status.get().css_class()>
                    {move || status.get().display_text()}
                </span>
            </div>
        </footer>
    }
}

async fn ping_server() -> bool {
    match Request::get(&api_url("/health")).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            false
        }
    }
}
