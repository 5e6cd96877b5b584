use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::{TEAM, TeamMember, ids};

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <RevealSection id=ids::TEAM class="team">
            <div class="container">
                <h2 class="section-title">"Meet the Team"</h2>
                <div class="team-grid">
                    {TEAM.iter().map(|member| view! { <MemberCard member=member /> }).collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn MemberCard(member: &'static TeamMember) -> impl IntoView {
    view! {
        <div class="member-card">
            <img src=member.image alt=member.name class="member-photo" />
            <p class="member-name">{member.name}</p>
            <p class="member-role">{member.role}</p>
        </div>
    }
}
