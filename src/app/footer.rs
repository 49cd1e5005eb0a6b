use leptos::prelude::*;

use crate::content::{build_year, SiteContent, SocialIcon};

fn icon_path(icon: SocialIcon) -> &'static str {
    match icon {
        SocialIcon::Github => "M12 .5a11.5 11.5 0 0 0-3.64 22.41c.58.1.79-.25.79-.56v-2c-3.2.7-3.87-1.37-3.87-1.37-.52-1.33-1.28-1.69-1.28-1.69-1.04-.71.08-.7.08-.7 1.15.08 1.76 1.18 1.76 1.18 1.03 1.76 2.69 1.25 3.35.96.1-.74.4-1.25.73-1.54-2.55-.29-5.24-1.28-5.24-5.68 0-1.26.45-2.28 1.18-3.09-.12-.29-.51-1.46.11-3.04 0 0 .97-.31 3.17 1.18a11 11 0 0 1 5.77 0c2.2-1.49 3.17-1.18 3.17-1.18.62 1.58.23 2.75.11 3.04.74.81 1.18 1.83 1.18 3.09 0 4.41-2.69 5.38-5.26 5.67.41.36.78 1.06.78 2.14v3.17c0 .31.21.67.8.56A11.5 11.5 0 0 0 12 .5Z",
        SocialIcon::Twitter => "M18.9 1.15h3.68l-8.04 9.19L24 22.85h-7.4l-5.8-7.58-6.63 7.58H.49l8.6-9.83L0 1.15h7.59l5.24 6.93 6.07-6.93Zm-1.29 19.5h2.04L6.48 3.24H4.3l13.31 17.41Z",
        SocialIcon::Linkedin => "M20.45 20.45h-3.56v-5.57c0-1.33-.02-3.04-1.85-3.04-1.86 0-2.14 1.45-2.14 2.94v5.67H9.35V9h3.41v1.56h.05c.48-.9 1.64-1.85 3.37-1.85 3.6 0 4.27 2.37 4.27 5.46v6.28ZM5.34 7.43a2.06 2.06 0 1 1 0-4.13 2.06 2.06 0 0 1 0 4.13ZM7.12 20.45H3.56V9h3.56v11.45ZM22.22 0H1.77C.79 0 0 .77 0 1.73v20.54C0 23.23.79 24 1.77 24h20.45c.98 0 1.78-.77 1.78-1.73V1.73C24 .77 23.2 0 22.22 0Z",
        SocialIcon::Mail => "M1.5 6.75A2.25 2.25 0 0 1 3.75 4.5h16.5a2.25 2.25 0 0 1 2.25 2.25v10.5a2.25 2.25 0 0 1-2.25 2.25H3.75A2.25 2.25 0 0 1 1.5 17.25V6.75Zm1.8.3 8.7 5.8 8.7-5.8a.75.75 0 0 0-.45-.3H3.75a.75.75 0 0 0-.45.3Z",
    }
}

/// Copyright line. Owners ending in a period ("Jr.") don't get a second one.
fn copyright(year: i32, owner: &str) -> String {
    format!("© {year} {}. All rights reserved.", owner.trim_end_matches('.'))
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let profile = &content.profile;

    view! {
        <footer class="bg-[#080807] py-12">
            <div class="container mx-auto px-4">
                <div class="max-w-6xl mx-auto">
                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <div>
                            <h3 class="text-2xl font-bold mb-2">{profile.initials.clone()}</h3>
                            <p class="text-gray-400">{profile.tagline.clone()}</p>
                        </div>
                        <ul class="flex gap-6 mt-6 md:mt-0">
                            {content
                                .social
                                .iter()
                                .map(|social| {
                                    view! {
                                        <li>
                                            <a
                                                href=social.url.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.platform.clone()
                                                class="text-gray-400 hover:text-white transition-colors"
                                            >
                                                <svg class="w-6 h-6" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                                                    <path d=icon_path(social.icon) />
                                                </svg>
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="border-t border-gray-800 mt-8 pt-8 text-center text-gray-400 text-sm">
                        {copyright(build_year(), &profile.short_name)}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_single_period() {
        assert_eq!(
            copyright(2025, "Samuel D. Jr."),
            "© 2025 Samuel D. Jr. All rights reserved."
        );
        assert_eq!(
            copyright(2025, "Sam"),
            "© 2025 Sam. All rights reserved."
        );
    }
}
