// ---------------------------------------------------------------------------
// Portfolio page content: hero, about, projects, skills, contact
// ---------------------------------------------------------------------------

use portfolio_dom::DomNode;
use portfolio_form::ContactForm;
use portfolio_render_html::{render_page, PageOptions};

pub static SECTIONS: [&str; 5] = ["hero", "about", "projects", "skills", "contact"];

struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Zylo",
        description: "A drag-and-drop e-commerce site builder that simplifies online store creation.",
        tags: &["React", "TypeScript", "Prisma"],
    },
    Project {
        title: "Brain Assessment",
        description: "An AI-powered tool for cognitive assessment and brain health monitoring.",
        tags: &["Next.js", "TensorFlow", "Python"],
    },
    Project {
        title: "Women & Child Safety App",
        description: "A mobile application designed to enhance safety with emergency alerts and location tracking.",
        tags: &["React Native", "Firebase", "Google Maps API"],
    },
    Project {
        title: "Audio Processing Tool",
        description: "An innovative tool for audio enhancement and processing using AI algorithms.",
        tags: &["Python", "TensorFlow", "Web Audio API"],
    },
];

const SKILL_GROUPS: &[(&str, &[(&str, u8)])] = &[
    (
        "Development",
        &[("React & Next.js", 90), ("TypeScript", 85), ("Node.js", 80), ("Prisma ORM", 75)],
    ),
    (
        "Other Skills",
        &[("UI/UX Design", 70), ("Cybersecurity", 65), ("AI & Machine Learning", 60), ("Audio Technology", 75)],
    ),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Instagram", "https://instagram.com"),
    ("Twitter", "https://twitter.com"),
    ("YouTube", "https://youtube.com"),
];

const CSS: &str = "body{margin:0;font-family:system-ui,sans-serif;background:#f8f9fa;color:#1f2937}\
section{min-height:100vh;padding:4rem 2rem;box-sizing:border-box}\
section.alt{background:#edf2f7}\
.nav-dots{position:fixed;right:2rem;top:50%;display:flex;flex-direction:column;gap:1rem}\
.nav-dots a{width:.75rem;height:.75rem;border-radius:50%;background:#d1d5db}\
.accent{color:#0ea5e9}\
.card{background:#fff;border:1px solid #e5e7eb;border-radius:.75rem;padding:1.5rem}\
.tag{display:inline-block;padding:.25rem .75rem;margin:.25rem;border-radius:999px;background:#f0f9ff;color:#0284c7}\
.bar{background:#e5e7eb;border-radius:999px;height:.6rem}.bar>div{background:#0ea5e9;height:100%;border-radius:999px}\
.field{display:flex;flex-direction:column;gap:.5rem;margin-bottom:1rem}\
.submit-btn{background:#0ea5e9;color:#fff;border:0;border-radius:.5rem;padding:.75rem 1.5rem}\
.submit-btn.loading{opacity:.6}\
.submitted-panel{background:#f0fdf4;border:1px solid #bbf7d0;border-radius:.5rem;padding:1.5rem;text-align:center}\
.toast{position:fixed;bottom:1.5rem;right:1.5rem;background:#fff;border:1px solid #e5e7eb;padding:1rem;border-radius:.5rem}\
.toast-destructive{background:#fef2f2;border-color:#fecaca}";

/// Browser side of the form. Posts JSON and swaps in the confirmation panel on success.
const FORM_SCRIPT: &str = r#"(function(){
  var area = document.querySelector('[data-key="contact-form"]');
  var initial = area ? area.innerHTML : '';
  function toast(title, text, bad){
    var t = document.createElement('div');
    t.className = bad ? 'toast toast-destructive' : 'toast';
    t.innerHTML = '<strong></strong><p></p>';
    t.firstChild.textContent = title; t.lastChild.textContent = text;
    document.body.appendChild(t); setTimeout(function(){ t.remove(); }, 5000);
  }
  function bind(){
    var form = area && area.querySelector('form');
    if (!form) return;
    form.addEventListener('submit', async function(e){
      e.preventDefault();
      var btn = form.querySelector('button[type=submit]');
      btn.disabled = true; btn.textContent = 'Sending...';
      var val = function(id){ return form.querySelector('#' + id).value; };
      var data = { name: val('name'), email: val('email'), message: val('message') };
      try {
        var res = await fetch('/api/contact', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body: JSON.stringify(data) });
        var body = await res.json();
        if (!res.ok) throw new Error(body.error || 'Failed to send message');
        toast('Message received!', "Thank you for reaching out. I'll get back to you soon.", false);
        area.innerHTML = '<div class="submitted-panel"><h3>Message Received!</h3><p>Thank you for reaching out. I\'ll get back to you as soon as possible.</p><button type="button" class="outline-btn">Send Another Message</button></div>';
        area.querySelector('button').addEventListener('click', function(){ area.innerHTML = initial; bind(); });
      } catch (err) {
        toast('Error', err instanceof Error ? err.message : 'Failed to send your message. Please try again later.', true);
      } finally {
        btn.disabled = false; btn.textContent = 'Send Message';
      }
    });
  }
  bind();
})();"#;

/// The full page tree, with the contact section holding `form`'s view.
pub fn page_tree(form: &ContactForm, destination: &str) -> DomNode {
    DomNode::new("main")
        .with_key("portfolio")
        .child(nav_dots())
        .child(hero())
        .child(about(destination))
        .child(projects())
        .child(skills())
        .child(contact(form, destination))
}

/// Render the whole page as HTML with a fresh contact form.
pub fn render_portfolio_page(destination: &str) -> String {
    let mut opts = PageOptions::new(page_tree(&ContactForm::new(), destination));
    opts.title = Some("Mugunthan | Portfolio".into());
    opts.description = Some("Full-stack developer & aspiring entrepreneur".into());
    opts.inline_css = Some(CSS.into());
    opts.inline_scripts.push(FORM_SCRIPT.into());
    render_page(&opts)
}

fn section(id: &str, alt: bool) -> DomNode {
    DomNode::new("section")
        .with_key(id)
        .with_attr("id", id)
        .with_class(if alt { "alt" } else { "plain" })
}

fn link(label: &str, href: &str) -> DomNode {
    let node = DomNode::text("a", label).with_attr("href", href);
    if href.starts_with("http") {
        node.with_attr("target", "_blank").with_attr("rel", "noopener noreferrer")
    } else {
        node
    }
}

fn nav_dots() -> DomNode {
    let dots = SECTIONS.iter().enumerate().map(|(i, id)| {
        DomNode::new("a")
            .with_attr("href", &format!("#{}", id))
            .with_attr("aria-label", &format!("Navigate to section {}", i + 1))
    });
    DomNode::new("nav").with_key("nav").with_class("nav-dots").with_children(dots)
}

fn hero() -> DomNode {
    section("hero", false)
        .child(
            DomNode::new("img")
                .with_class("profile")
                .with_attr("src", "/placeholder.svg?height=400&width=400")
                .with_attr("alt", "Mugunthan's profile"),
        )
        .child(
            DomNode::text("h1", "Hello, I'm ")
                .child(DomNode::text("span", "Mugunthan").with_class("accent")),
        )
        .child(DomNode::text("p", "Full-stack developer & aspiring entrepreneur"))
        .child(
            DomNode::new("div")
                .with_class("actions")
                .child(link("View Projects", "#projects"))
                .child(link("Contact Me", "#contact")),
        )
}

fn about(destination: &str) -> DomNode {
    let mailto = format!("mailto:{}", destination);
    let socials = SOCIAL_LINKS
        .iter()
        .map(|(label, href)| link(label, href))
        .chain(std::iter::once(link("Email", &mailto)));

    section("about", true)
        .child(DomNode::text("h2", "About Me"))
        .child(DomNode::text(
            "p",
            "I'm a passionate full-stack developer with expertise in React, TypeScript, Prisma, and modern web \
             technologies. My journey in tech is driven by a deep interest in AI, cybersecurity, and audio technology.",
        ))
        .child(DomNode::text(
            "p",
            "Beyond coding, I enjoy building innovative software solutions that solve real-world problems. I've led \
             multiple team projects and I'm always looking for new challenges.",
        ))
        .child(DomNode::new("div").with_class("socials").with_children(socials))
}

fn projects() -> DomNode {
    let cards = PROJECTS.iter().enumerate().map(|(i, p)| {
        let tags = p.tags.iter().map(|t| DomNode::text("span", t).with_class("tag"));
        DomNode::new("div")
            .with_key(&format!("project-{}", i))
            .with_class("card")
            .child(DomNode::text("h3", p.title))
            .child(DomNode::text("p", p.description))
            .child(DomNode::new("div").with_class("tags").with_children(tags))
            .child(DomNode::text("button", "View Project").with_attr("type", "button"))
    });
    section("projects", false)
        .child(DomNode::text("h2", "Projects"))
        .child(DomNode::new("div").with_class("grid").with_children(cards))
}

fn skills() -> DomNode {
    let groups = SKILL_GROUPS.iter().map(|(heading, items)| {
        let bars = items.iter().map(|(label, level)| {
            let pct = format!("{}%", level);
            DomNode::new("li")
                .child(DomNode::text("span", label))
                .child(DomNode::text("span", &pct).with_class("level"))
                .child(
                    DomNode::new("div")
                        .with_class("bar")
                        .child(DomNode::new("div").with_attr("style", &format!("width:{}", pct))),
                )
        });
        DomNode::new("div")
            .child(DomNode::text("h3", heading))
            .child(DomNode::new("ul").with_children(bars))
    });
    section("skills", true)
        .child(DomNode::text("h2", "Skills & Expertise"))
        .child(DomNode::new("div").with_class("grid").with_children(groups))
}

fn contact(form: &ContactForm, destination: &str) -> DomNode {
    let mailto = format!("mailto:{}", destination);
    section("contact", false)
        .child(DomNode::text("h2", "Get In Touch"))
        .child(DomNode::text(
            "p",
            "Interested in collaborating or have a project in mind? Feel free to reach out!",
        ))
        .child(portfolio_form::render(form))
        .child(
            DomNode::new("div")
                .with_class("direct")
                .child(DomNode::text("h3", "Or reach me directly at:"))
                .child(link(destination, &mailto))
                .child(link("LinkedIn Profile", "https://linkedin.com")),
        )
}
