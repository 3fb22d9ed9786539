// Contact page - contact methods, services, response times, hours
use crate::content::{
    CONTACT_MAILTO, CONTACT_METHODS, ContactMethod, OFFICE_HOURS, OfficeHours, PROJECT_TYPES,
    ProjectType, RESPONSE_CHANNELS, ResponseChannel,
};
use crate::sections::{CallToAction, PageHeader, SectionHeading};
use crate::styles::{HIGHLIGHT_PANEL, PAGE_BACKGROUND, PAGE_CONTAINER, PANEL};
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class=PAGE_BACKGROUND>
            <div class=PAGE_CONTAINER>
                <PageHeader
                    title="Get In Touch"
                    lead="Let's collaborate on something amazing! We're always excited to discuss new projects and opportunities 🌟"
                />

                <section class="mb-20" data-section="contact-methods">
                    <SectionHeading
                        title="How to Reach Us 📱"
                        subtitle="Choose your preferred way to connect"
                    />
                    <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                        {CONTACT_METHODS
                            .iter()
                            .map(|method| view! { <ContactCard method=*method /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="mb-20" data-section="project-types">
                    <SectionHeading
                        title="How We Can Help 🛠️"
                        subtitle="Areas where we excel and love to collaborate"
                    />
                    <div class="grid md:grid-cols-2 gap-6 max-w-4xl mx-auto">
                        {PROJECT_TYPES
                            .iter()
                            .map(|project| view! { <ProjectTypeCard project=*project /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="mb-20" data-section="response-times">
                    <div class=format!("{HIGHLIGHT_PANEL} max-w-3xl mx-auto text-center")>
                        <h2 class="text-2xl sm:text-3xl font-bold text-white mb-4">
                            "Quick Response Guaranteed ⚡"
                        </h2>
                        <p class="text-gray-400 mb-6 leading-relaxed">
                            "We typically respond to emails within 24 hours during business days. For urgent matters, feel free to mention it in your subject line!"
                        </p>
                        <div class="grid md:grid-cols-3 gap-4 text-center">
                            {RESPONSE_CHANNELS
                                .iter()
                                .map(|channel| view! { <ResponseTime channel=*channel /> })
                                .collect_view()}
                        </div>
                    </div>
                </section>

                <section class="mb-20" data-section="working-hours">
                    <div class=format!("{PANEL} max-w-2xl mx-auto text-center")>
                        <h2 class="text-2xl font-bold text-white mb-6">"Our Working Hours 🕐"</h2>
                        <div class="space-y-3 text-gray-300">
                            {OFFICE_HOURS
                                .iter()
                                .map(|entry| view! { <HoursRow hours=*entry /> })
                                .collect_view()}
                        </div>
                        <p class="text-sm text-gray-400 mt-4">
                            "* Emergency support available 24/7 for critical issues"
                        </p>
                    </div>
                </section>

                <CallToAction
                    title="Ready to Start Something Amazing? 🎉"
                    body="Whether you have a specific project in mind or just want to explore possibilities, we'd love to hear from you. Let's build the future together!"
                    href=CONTACT_MAILTO
                    label="Send us an Email 📧"
                />
            </div>
        </div>
    }
}

#[component]
fn ContactCard(method: ContactMethod) -> impl IntoView {
    let pill = format!(
        "inline-block px-3 py-1 bg-gradient-to-r {} text-white text-sm rounded-full font-medium",
        method.color
    );

    view! {
        <a
            href=method.href
            target="_blank"
            rel="noopener noreferrer"
            class="group bg-gray-800/50 p-6 rounded-xl border border-gray-700 hover:border-gray-600 transition-all duration-300 hover:transform hover:scale-105"
            data-card="contact-method"
        >
            <div class="flex items-start space-x-4">
                <div class="text-4xl">{method.icon}</div>
                <div class="flex-1">
                    <h3 class="text-xl font-semibold text-white mb-2 group-hover:text-blue-400 transition-colors">
                        {method.title}
                    </h3>
                    <p class="text-gray-400 text-sm mb-3 leading-relaxed">{method.description}</p>
                    <div class=pill>{method.value}</div>
                </div>
            </div>
        </a>
    }
}

#[component]
fn ProjectTypeCard(project: ProjectType) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 p-6 rounded-xl border border-gray-700" data-card="project-type">
            <div class="flex items-center space-x-4 mb-3">
                <div class="text-3xl">{project.icon}</div>
                <h3 class="text-lg font-semibold text-white">{project.title}</h3>
            </div>
            <p class="text-gray-400 text-sm leading-relaxed">{project.description}</p>
        </div>
    }
}

#[component]
fn ResponseTime(channel: ResponseChannel) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 p-4 rounded-lg">
            <div class="text-2xl mb-2">{channel.icon}</div>
            <div class="text-white font-semibold">{channel.channel}</div>
            <div class="text-sm text-gray-400">{channel.turnaround}</div>
        </div>
    }
}

#[component]
fn HoursRow(hours: OfficeHours) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center">
            <span>{hours.days}</span>
            <span class=hours.tone.text_class()>{hours.hours}</span>
        </div>
    }
}
