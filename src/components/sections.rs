//! Static page sections rendered from the content tables.

use leptos::prelude::*;

use crate::content::{EXPERIENCES, PERSONAL_INFO, PROJECTS, SKILLS};

/// Hero banner with availability badge and calls to action.
#[component]
pub fn Hero() -> impl IntoView {
	view! {
		<section id="home" class="section hero">
			<div class="reveal hero-badge">
				<span class="pulse-dot"></span>
				<span>{PERSONAL_INFO.availability}</span>
			</div>
			<h1 class="reveal hero-title">
				<span class="block">"SYSTEM"</span>
				<span class="block text-gradient">"ARCHITECT"</span>
				<span class="block faint">"RICHARD"</span>
			</h1>
			<p class="reveal hero-bio">{PERSONAL_INFO.bio}</p>
			<div class="reveal hero-actions">
				<a href="#projects" class="button-solid">
					"Explore Work"
				</a>
				<a href="#contact" class="button-glass">
					"Initiate Contact"
				</a>
			</div>
		</section>
	}
}

/// Bento grid of skill categories.
#[component]
pub fn Skills() -> impl IntoView {
	view! {
		<section id="about" class="section">
			<div class="reveal section-heading">
				<h2>"INFRASTRUCTURE"</h2>
				<p>"Technological stack and methodology"</p>
			</div>
			<div class="bento-grid">
				{SKILLS
					.iter()
					.enumerate()
					.map(|(idx, skill)| {
						let span = if idx == 0 { "bento-card bento-wide" } else { "bento-card" };
						view! {
							<div class=format!("reveal {span}")>
								<div>
									<h3 class="bento-category">{skill.category}</h3>
									<div class="tag-list">
										{skill
											.items
											.iter()
											.map(|item| view! { <span class="tag">{*item}</span> })
											.collect_view()}
									</div>
								</div>
								<div class="bento-index">{format!("0{}", idx + 1)}</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// Project showcase cards.
#[component]
pub fn Projects() -> impl IntoView {
	view! {
		<section id="projects" class="section">
			<div class="reveal section-heading">
				<h2>"PORTFOLIO"</h2>
				<p>"Autonomous systems and digital logic"</p>
			</div>
			<div class="project-grid">
				{PROJECTS
					.iter()
					.map(|project| {
						let href = project.link.or(project.github).unwrap_or("#");
						view! {
							<div class="reveal project-card">
								<div class="project-image">
									<img src=project.image alt=project.title />
								</div>
								<div class="project-body">
									<h3>{project.title}</h3>
									<p>{project.description}</p>
									<div class="tag-list">
										{project
											.tags
											.iter()
											.map(|tag| view! { <span class="tag">{*tag}</span> })
											.collect_view()}
									</div>
									<a href=href class="project-link">
										"Analyze Architecture"
									</a>
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// Experience timeline.
#[component]
pub fn Timeline() -> impl IntoView {
	view! {
		<section id="experience" class="section">
			<div class="reveal section-heading centered">
				<h2>"TRAJECTORY"</h2>
				<div class="heading-rule"></div>
			</div>
			<div class="timeline">
				{EXPERIENCES
					.iter()
					.map(|exp| {
						view! {
							<div class="reveal timeline-entry">
								<span class="timeline-period">{exp.period}</span>
								<h3>{exp.role}</h3>
								<p class="timeline-company">{exp.company}</p>
								<ul class="timeline-points">
									{exp
										.description
										.iter()
										.map(|item| view! { <li>{*item}</li> })
										.collect_view()}
								</ul>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// Contact panel with the (client-only) inquiry form.
#[component]
pub fn Contact() -> impl IntoView {
	view! {
		<section id="contact" class="section">
			<div class="reveal contact-panel">
				<div>
					<h2 class="contact-title">
						"READY TO " <br /> <span class="text-gradient">"SCALE?"</span>
					</h2>
					<p class="contact-note">"Currently accepting strategic architectural inquiries."</p>
					<a href=format!("mailto:{}", PERSONAL_INFO.email) class="contact-email">
						{PERSONAL_INFO.email}
					</a>
				</div>
				<form class="contact-form" on:submit=|ev| ev.prevent_default()>
					<div class="contact-form-row">
						<input type="text" placeholder="IDENTITY" />
						<input type="email" placeholder="EMAIL" />
					</div>
					<textarea placeholder="ARCHITECTURAL INQUIRY SUMMARY..."></textarea>
					<button type="submit">"INITIALIZE UPLINK"</button>
				</form>
			</div>
		</section>
	}
}

/// Site footer.
#[component]
pub fn Footer() -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();
	view! {
		<footer class="footer">
			<div class="navbar-brand">"RA" <span class="accent">"."</span></div>
			<p>{format!("© {year} {} • Lagos Origin", PERSONAL_INFO.name)}</p>
			<div class="footer-links">
				<a href=PERSONAL_INFO.linkedin>"LinkedIn"</a>
				<a href=PERSONAL_INFO.github>"GitHub"</a>
				<a href="#">"X"</a>
			</div>
		</footer>
	}
}
