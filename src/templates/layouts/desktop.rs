use crate::domain::{Role, User};
use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "SRM Accommodation Finder";

pub fn desktop_layout(title: &str, user: Option<&User>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { (SITE_NAME) }
                    nav {
                        @if let Some(user) = user {
                            span class="welcome" { "Welcome, " (user.username) }
                            @match user.role {
                                Role::Student => a href="/search" { "Search" },
                                Role::Broker => a href="/upload" { "Upload" },
                            }
                            form action="/auth/logout" method="post" class="inline" {
                                button type="submit" class="btn secondary" { "Logout" }
                            }
                        } @else {
                            a href="/login" class="btn secondary" { "Login / Sign Up" }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
                footer {
                    p { "© " (Utc::now().year()) " " (SITE_NAME) ". All rights reserved." }
                }
            }
        }
    }
}
