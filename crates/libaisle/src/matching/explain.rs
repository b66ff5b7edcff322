use crate::{
  matching::Subscores,
  model::{Vendor, WeddingPreferences},
};

const MAX_HIGHLIGHTS: usize = 5;
const MAX_CONCERNS: usize = 3;

// Badge types surfaced to couples; anything else is internal plumbing.
const RECOGNIZED_BADGES: &[&str] = &["elite", "top_rated", "featured", "responsive"];

pub(crate) struct Explanation {
  pub reason: String,
  pub highlights: Vec<String>,
  pub concerns: Vec<String>,
}

/// Renders the display-only explanation for one scored vendor. Purely
/// derived from the sub-scores and the vendor record; never feeds back into
/// the ranking.
pub(crate) fn annotate(vendor: &Vendor, preferences: &WeddingPreferences, subscores: &Subscores, match_score: f64) -> Explanation {
  let mut highlights = Vec::new();
  let mut concerns = Vec::new();

  if subscores.budget >= 90.0 {
    highlights.push("Well within your budget".to_string());
  } else if subscores.budget <= 40.0 {
    concerns.push("May be above your budget range".to_string());
  }

  if subscores.style >= 80.0 {
    let matched = preferences
      .wedding_style
      .iter()
      .filter(|style| vendor.style_tags.iter().any(|tag| tag.eq_ignore_ascii_case(style)))
      .take(2)
      .cloned()
      .collect::<Vec<_>>();

    match matched.as_slice() {
      [only] => highlights.push(format!("Perfect match for {only} style")),
      [first, second] => highlights.push(format!("Perfect match for {first} & {second} style")),
      _ => {},
    }
  }

  if subscores.location >= 90.0 {
    highlights.push("Conveniently located near you".to_string());
  } else if subscores.location <= 40.0 {
    concerns.push("Located outside your preferred area".to_string());
  }

  match vendor.average_rating {
    Some(rating) if rating >= 4.8 => {
      highlights.push(format!("Exceptional {rating:.1}-star rating from {} reviews", vendor.review_count.unwrap_or(0)));
    },

    Some(rating) if rating >= 4.5 => {
      highlights.push("Highly rated".to_string());
    },

    _ if vendor.review_count.unwrap_or(0) < 5 => {
      concerns.push("Limited customer reviews".to_string());
    },

    _ => {},
  }

  if vendor.is_verified {
    highlights.push("Verified vendor".to_string());
  }

  let recognized = vendor.badges.iter().filter(|badge| RECOGNIZED_BADGES.contains(&badge.badge_type.as_str())).count();

  if recognized > 0 {
    let plural = if recognized == 1 { "" } else { "s" };

    highlights.push(format!("Holds {recognized} recognition badge{plural}"));
  }

  if let Some(hours) = vendor.response_time_hours
    && hours <= 6.0
  {
    highlights.push("Quick to respond (usually within 6 hours)".to_string());
  }

  let prefix = if match_score >= 85.0 {
    "Excellent match for your wedding"
  } else if match_score >= 70.0 {
    "Great option worth considering"
  } else {
    "Good choice for your wedding"
  };

  let reason = match highlights.first() {
    Some(highlight) => format!("{prefix}. {highlight}."),
    None => format!("{prefix}."),
  };

  highlights.truncate(MAX_HIGHLIGHTS);
  concerns.truncate(MAX_CONCERNS);

  Explanation { reason, highlights, concerns }
}
