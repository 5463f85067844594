use yew::prelude::*;
use crate::components::fallback_image::FallbackImage;
use crate::content::TeamMember;
use crate::reveal::stagger_style;

#[derive(Properties, PartialEq)]
pub struct TeamSectionProps {
    pub heading: &'static str,
    pub members: &'static [TeamMember],
}

#[function_component(TeamSection)]
pub fn team_section(props: &TeamSectionProps) -> Html {
    if props.members.is_empty() {
        return html! {};
    }
    html! {
        <section class="team-section">
            <h2 class="reveal">{props.heading}</h2>
            <div class="team-grid">
                { for props.members.iter().enumerate().map(|(index, member)| html! {
                    <article class="team-card reveal" key={member.name} style={stagger_style(index)}>
                        <FallbackImage class={classes!("team-photo")} src={member.photo} alt={member.name} />
                        <h3>{member.name}</h3>
                        <p class="team-role">{member.role}</p>
                        <p class="team-registry">{member.registry}</p>
                        <p class="team-bio">{member.bio}</p>
                    </article>
                }) }
            </div>
        </section>
    }
}
