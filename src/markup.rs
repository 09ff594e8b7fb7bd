//! HTML markup for the listing view.
//!
//! The presentation-side consumer of `listing`: turns the immutable view
//! model into the card markup the page container is filled with. All
//! record-derived text is escaped; the action buttons carry the record id
//! as data attributes for the shell's click delegation.

use crate::listing::{LawyerCard, ListingView};

/// Escape text for interpolation into HTML content or attribute values.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full listing container contents.
pub fn render_listing(view: &ListingView) -> String {
    match view {
        ListingView::Empty { message } => format!("<h3>{}</h3>", escape_html(message)),
        ListingView::Results { count_line, cards } => {
            let mut html = format!(
                "<p class=\"result-count\">{}</p>",
                escape_html(count_line)
            );
            for card in cards {
                html.push_str(&render_card(card));
            }
            html
        }
    }
}

fn render_card(card: &LawyerCard) -> String {
    let mut education = String::new();
    for line in &card.education {
        education.push_str(&format!(
            "<li><strong>{}</strong><span>{}</span></li>",
            escape_html(&line.school),
            escape_html(&line.detail)
        ));
    }

    let badge = if card.verified_badge {
        "<span class=\"verified-badge\"><i class=\"fas fa-check-circle\"></i> Verified</span>"
    } else {
        ""
    };

    format!(
        r#"
        <div class="lawyer-card">
            <div class="card-left">
                <img src="{image}" alt="{name}">
                <div class="rating"><i class="fas fa-star"></i> {rating} <span>({reviews})</span></div>
            </div>
            <div class="card-body">
                <div class="card-header">
                    <h2>{name}</h2>
                    {badge}
                </div>
                <p class="specialty">{specialty}</p>
                <p class="location"><i class="fas fa-map-marker-alt"></i> {location}</p>
                <hr>
                <div class="education-section">
                    <h4><i class="fas fa-graduation-cap"></i> Education</h4>
                    <ul class="education-list">{education}</ul>
                </div>
            </div>
            <div class="card-actions">
                <span class="price">{price}</span>
                <button class="btn btn-primary" data-action="send-request" data-lawyer-id="{id}">Send Request</button>
                <button class="btn btn-outline" data-action="view-profile" data-lawyer-id="{id}">Profile</button>
            </div>
        </div>"#,
        image = escape_html(&card.image),
        name = escape_html(&card.name),
        rating = card.rating,
        reviews = card.review_count,
        badge = badge,
        specialty = escape_html(&card.specialty),
        location = escape_html(&card.location_line),
        education = education,
        price = escape_html(&card.price_line),
        id = card.lawyer_id,
    )
}
