//! Command handlers
//!
//! Each handler works against [`AppState`] and writes its report to `out`,
//! so the binary passes stdout and tests pass a buffer.

use std::io::Write;

use nearby_core::analytics::TREND_DAYS;
use nearby_core::draft::{image_data_url, image_mime_for};
use nearby_core::{
    discover, format_distance, recent, Category, DashboardStats, Enquiry, Owner, OwnerDraft,
    Query, Selection, SocialProvider, Space, SpaceDraft,
};
use nearby_net::{GeminiClient, StatusProbe, SummaryProvider};
use rand::Rng;
use tracing::{info, warn};

use crate::cli::{AddSpaceArgs, Command, EnquireArgs, RegisterArgs, SpacesArgs};
use crate::error::{AppError, Result};
use crate::state::AppState;

pub async fn run<W: Write>(state: &AppState, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Spaces(args) => spaces(state, args, out).await,
        Command::Recent { limit } => recent_spaces(state, limit, out),
        Command::Show { id } => show(state, &id, out),
        Command::Register(args) => register(state, args, out),
        Command::Login { email } => login(state, &email, out),
        Command::SocialLogin { provider } => social_login(state, provider.into(), out),
        Command::Logout => logout(state, out),
        Command::Whoami => whoami(state, out),
        Command::AddSpace(args) => add_space(state, args, out),
        Command::Enquire(args) => enquire(state, args, out),
        Command::Dashboard { space } => dashboard(state, space, &mut rand::thread_rng(), out),
        Command::Summary { id } => summary(state, &id, out).await,
        Command::Status => status(state, out).await,
    }
}

// Browsing

async fn spaces<W: Write>(state: &AppState, args: SpacesArgs, out: &mut W) -> Result<()> {
    let all = state.store().list_all_spaces()?;

    let observer = match (args.near, args.locate) {
        (Some(coords), _) => Some(coords),
        (None, true) => match state.locator()?.acquire().await {
            Ok(coords) => Some(coords),
            Err(e) => {
                writeln!(out, "{}; showing unranked results", e)?;
                None
            }
        },
        (None, false) => None,
    };

    let query = Query::default()
        .with_category(args.category)
        .with_search(args.search.unwrap_or_default())
        .near_opt(observer);
    let results = discover(&all, &query);

    if results.is_empty() {
        writeln!(out, "No spaces match")?;
    }
    for space in &results {
        write_space_line(out, space)?;
    }
    Ok(())
}

fn recent_spaces<W: Write>(state: &AppState, limit: usize, out: &mut W) -> Result<()> {
    let all = state.store().list_all_spaces()?;
    for space in recent(&all, limit) {
        write_space_line(out, &space)?;
    }
    Ok(())
}

fn show<W: Write>(state: &AppState, id: &str, out: &mut W) -> Result<()> {
    let space = find_space(state, id)?;

    writeln!(out, "{}", space.title)?;
    writeln!(out, "  Category:  {}", space.category)?;
    writeln!(
        out,
        "  Price:     ₹{}/{}",
        format_price(space.price),
        space.period
    )?;
    writeln!(out, "  Location:  {}", space.location)?;
    writeln!(out, "  Address:   {}", space.address)?;
    if let Some(coords) = space.coordinates() {
        writeln!(out, "  Position:  {}", coords)?;
    }
    writeln!(
        out,
        "  Size:      {} sq ft, up to {} people",
        space.sq_ft, space.capacity
    )?;
    if !space.amenities.is_empty() {
        writeln!(out, "  Amenities: {}", space.amenities.join(", "))?;
    }
    writeln!(out, "  Views:     {}", space.views())?;
    writeln!(
        out,
        "  Contact:   {} <{}> {}",
        space.owner_name, space.owner_email, space.owner_phone
    )?;
    writeln!(out)?;
    writeln!(out, "{}", space.description)?;
    Ok(())
}

// Accounts

fn register<W: Write>(state: &AppState, args: RegisterArgs, out: &mut W) -> Result<()> {
    let owner = OwnerDraft {
        first_name: args.first_name,
        last_name: args.last_name,
        mobile: args.mobile,
        email: args.email,
    }
    .into_owner()?;

    state.store().register_owner(owner.clone())?;
    writeln!(out, "Welcome, {}", owner.display_name())?;
    Ok(())
}

fn login<W: Write>(state: &AppState, email: &str, out: &mut W) -> Result<()> {
    let owner = state
        .store()
        .login(email)?
        .ok_or_else(|| AppError::UnknownEmail(email.to_string()))?;

    writeln!(out, "Signed in as {}", owner.display_name())?;
    Ok(())
}

fn social_login<W: Write>(state: &AppState, provider: SocialProvider, out: &mut W) -> Result<()> {
    let owner = state.store().social_login(provider)?;
    writeln!(
        out,
        "Signed in with {} as {}",
        provider.name(),
        owner.display_name()
    )?;
    Ok(())
}

fn logout<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    state.store().logout()?;
    writeln!(out, "Signed out")?;
    Ok(())
}

fn whoami<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    match state.store().current_user()? {
        Some(owner) => writeln!(out, "{} <{}>", owner.display_name(), owner.email)?,
        None => writeln!(out, "Not signed in")?,
    }
    Ok(())
}

// Listings and enquiries

fn add_space<W: Write>(state: &AppState, args: AddSpaceArgs, out: &mut W) -> Result<()> {
    let owner = state.require_owner()?;

    let image_url = match &args.image {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            Some(image_data_url(&bytes, image_mime_for(extension)))
        }
        None => args.image_url,
    };

    let mut draft = SpaceDraft::new(args.title, args.price);
    draft.category = args.category.map(Category::new);
    draft.period = args.period;
    draft.location = args.location;
    draft.address = args.address;
    draft.description = args.description;
    for amenity in &args.amenities {
        draft.add_amenity(amenity);
    }
    draft.image_url = image_url;
    draft.gallery = args.gallery;
    draft.sq_ft = args.sq_ft;
    draft.capacity = args.capacity;
    if let Some(coords) = args.at {
        draft.set_coordinates(coords);
    }

    let space = draft.into_space(&owner)?;
    if !space.category.is_known() {
        warn!(category = %space.category, "Listing uses an unknown category");
    }

    let id = space.id.clone();
    state.store().save_space(space)?;
    info!(space_id = %id, "Listing created");

    writeln!(out, "Listed space {}", id)?;
    Ok(())
}

fn enquire<W: Write>(state: &AppState, args: EnquireArgs, out: &mut W) -> Result<()> {
    let space = find_space(state, &args.space)?;
    let enquiry = Enquiry::new(&space, args.name, args.mobile, args.email, args.message);

    state.store().record_enquiry(enquiry)?;
    writeln!(out, "Enquiry sent to {}", space.owner_name)?;
    Ok(())
}

fn dashboard<W: Write, R: Rng + ?Sized>(
    state: &AppState,
    space: Option<String>,
    rng: &mut R,
    out: &mut W,
) -> Result<()> {
    let owner = state.require_owner()?;
    let (listings, enquiries) = {
        let store = state.store();
        (
            store.list_owner_spaces(&owner.id)?,
            store.list_enquiries(&owner.id)?,
        )
    };

    let selection = match space {
        Some(id) if listings.iter().any(|s| s.id == id) => Selection::Space(id),
        Some(id) => {
            return Err(
                nearby_core::Error::NotFound(format!("Space {} is not one of your listings", id))
                    .into(),
            )
        }
        None => Selection::All,
    };

    let stats = DashboardStats::compute(&listings, &enquiries, &selection);
    write_dashboard(out, &owner, &stats, rng)?;

    writeln!(out)?;
    writeln!(out, "Your spaces:")?;
    if listings.is_empty() {
        writeln!(out, "  (none yet)")?;
    }
    for space in &listings {
        write!(out, "  ")?;
        write_space_line(out, space)?;
    }

    writeln!(out)?;
    writeln!(out, "Enquiries:")?;
    if enquiries.is_empty() {
        writeln!(out, "  (none yet)")?;
    }
    for enquiry in enquiries.iter().rev() {
        writeln!(
            out,
            "  {}  {}  {} <{}> {}: {}",
            enquiry.created_at.format("%Y-%m-%d"),
            enquiry.space_title,
            enquiry.user_name,
            enquiry.user_email,
            enquiry.user_mobile,
            enquiry.message
        )?;
    }
    Ok(())
}

fn write_dashboard<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    owner: &Owner,
    stats: &DashboardStats,
    rng: &mut R,
) -> std::io::Result<()> {
    writeln!(out, "Dashboard for {}", owner.display_name())?;
    writeln!(
        out,
        "Listings: {}  Views: {}  Enquiries: {}  Conversion: {:.1}%",
        stats.listings, stats.total_views, stats.total_enquiries, stats.conversion_rate
    )?;

    let join = |series: Vec<u64>| {
        series
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };
    writeln!(
        out,
        "Views, last {} days:     {}",
        TREND_DAYS,
        join(stats.views_trend(rng))
    )?;
    writeln!(
        out,
        "Enquiries, last {} days: {}",
        TREND_DAYS,
        join(stats.enquiries_trend(rng))
    )
}

// Remote services

async fn summary<W: Write>(state: &AppState, id: &str, out: &mut W) -> Result<()> {
    let space = find_space(state, id)?;
    let client = GeminiClient::new(state.config.summary.clone())?;

    writeln!(out, "{}", client.summarize(&space).await)?;
    Ok(())
}

async fn status<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    let probe = StatusProbe::new(state.config.status.clone())?;
    writeln!(out, "Remote database: {}", probe.check().await)?;
    Ok(())
}

// Formatting

fn find_space(state: &AppState, id: &str) -> Result<Space> {
    state
        .store()
        .find_space(id)?
        .ok_or_else(|| nearby_core::Error::NotFound(format!("Space {}", id)).into())
}

fn write_space_line<W: Write>(out: &mut W, space: &Space) -> std::io::Result<()> {
    write!(
        out,
        "{}  {}  [{}]  ₹{}/{}  {}",
        space.id,
        space.title,
        space.category,
        format_price(space.price),
        space.period,
        space.location
    )?;
    if let Some(km) = space.distance {
        write!(out, "  ({} away)", format_distance(km))?;
    }
    writeln!(out)
}

/// Price with Indian digit grouping (`1,50,000`), paise shown only when
/// non-zero
fn format_price(price: f64) -> String {
    let rounded = (price * 100.0).round() / 100.0;
    let paise = ((rounded - rounded.trunc()) * 100.0).round() as u64;
    let digits = (rounded.trunc() as u64).to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if paise == 0 {
        grouped
    } else {
        format!("{}.{:02}", grouped, paise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProviderArg;
    use crate::config::Config;
    use nearby_core::{Coordinates, Period};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::open(dir.path().to_path_buf(), Config::default()).unwrap();
        (dir, state)
    }

    async fn exec(state: &AppState, command: Command) -> Result<String> {
        let mut out: Vec<u8> = Vec::new();
        run(state, command, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn register_args(email: &str) -> RegisterArgs {
        RegisterArgs {
            first_name: "Meera".into(),
            last_name: "Iyer".into(),
            mobile: "9123456780".into(),
            email: email.into(),
        }
    }

    fn spaces_args() -> SpacesArgs {
        SpacesArgs {
            category: Category::ALL.to_string(),
            search: None,
            near: None,
            locate: false,
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(500.0), "500");
        assert_eq!(format_price(12_000.0), "12,000");
        assert_eq!(format_price(150_000.0), "1,50,000");
        assert_eq!(format_price(12_345_678.0), "1,23,45,678");
        assert_eq!(format_price(999.5), "999.50");
    }

    #[tokio::test]
    async fn test_spaces_lists_seed_in_order() {
        let (_dir, state) = state();
        let out = exec(&state, Command::Spaces(spaces_args())).await.unwrap();

        let ids: Vec<&str> = out
            .lines()
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert!(out.contains("₹12,000/hour"));
        assert!(!out.contains("away"));
    }

    #[tokio::test]
    async fn test_spaces_ranked_near() {
        let (_dir, state) = state();
        let args = SpacesArgs {
            near: Some(Coordinates::new(28.6315, 77.2167)),
            ..spaces_args()
        };
        let out = exec(&state, Command::Spaces(args)).await.unwrap();

        let first = out.lines().next().unwrap();
        assert!(first.starts_with("3  Creator Studio B"));
        assert!(first.contains("km away"));
    }

    #[tokio::test]
    async fn test_spaces_filtered() {
        let (_dir, state) = state();
        let args = SpacesArgs {
            category: "Event Spaces".into(),
            search: Some("bangalore".into()),
            ..spaces_args()
        };
        let out = exec(&state, Command::Spaces(args)).await.unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("The Industrial Loft Event Hall"));

        let args = SpacesArgs {
            search: Some("atlantis".into()),
            ..spaces_args()
        };
        let out = exec(&state, Command::Spaces(args)).await.unwrap();
        assert_eq!(out.trim(), "No spaces match");
    }

    #[tokio::test]
    async fn test_locate_without_position_is_unranked() {
        let (_dir, state) = state();
        let args = SpacesArgs {
            locate: true,
            ..spaces_args()
        };
        let out = exec(&state, Command::Spaces(args)).await.unwrap();

        assert!(out.starts_with("Location unavailable; showing unranked results"));
        assert_eq!(out.lines().count(), 6);
        assert!(!out.contains("away"));
    }

    #[tokio::test]
    async fn test_show_unknown_space() {
        let (_dir, state) = state();
        let result = exec(&state, Command::Show { id: "nope".into() }).await;
        assert!(matches!(
            result,
            Err(AppError::Core(nearby_core::Error::NotFound(_)))
        ));

        let out = exec(&state, Command::Show { id: "2".into() }).await.unwrap();
        assert!(out.starts_with("The Industrial Loft Event Hall\n"));
        assert!(out.contains("Contact:   Rahul Verma <rahul@creativevenues.io>"));
    }

    #[tokio::test]
    async fn test_session_commands() {
        let (_dir, state) = state();

        let out = exec(&state, Command::Whoami).await.unwrap();
        assert_eq!(out.trim(), "Not signed in");

        let out = exec(&state, Command::Register(register_args("meera@example.com")))
            .await
            .unwrap();
        assert_eq!(out.trim(), "Welcome, Meera Iyer");

        let result = exec(&state, Command::Register(register_args("MEERA@example.com"))).await;
        assert!(matches!(
            result,
            Err(AppError::Core(nearby_core::Error::EmailTaken(_)))
        ));

        exec(&state, Command::Logout).await.unwrap();
        let out = exec(&state, Command::Whoami).await.unwrap();
        assert_eq!(out.trim(), "Not signed in");

        let result = exec(&state, Command::Login { email: "nobody@example.com".into() }).await;
        assert!(matches!(result, Err(AppError::UnknownEmail(_))));

        exec(&state, Command::Login { email: "Meera@Example.com".into() })
            .await
            .unwrap();
        let out = exec(&state, Command::Whoami).await.unwrap();
        assert_eq!(out.trim(), "Meera Iyer <meera@example.com>");
    }

    #[tokio::test]
    async fn test_social_login_reuses_identity() {
        let (_dir, state) = state();
        let command = || Command::SocialLogin {
            provider: ProviderArg::Google,
        };

        let out = exec(&state, command()).await.unwrap();
        assert_eq!(out.trim(), "Signed in with Google as Google User");
        exec(&state, command()).await.unwrap();

        assert_eq!(state.store().list_owners().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_space_requires_sign_in() {
        let (_dir, state) = state();
        let args = AddSpaceArgs {
            title: "Sunny Studio".into(),
            price: 1200.0,
            ..Default::default()
        };
        let result = exec(&state, Command::AddSpace(args)).await;
        assert!(matches!(result, Err(AppError::NotSignedIn)));
    }

    #[tokio::test]
    async fn test_add_space_with_image_file() {
        let (dir, state) = state();
        exec(&state, Command::Register(register_args("meera@example.com")))
            .await
            .unwrap();

        let image = dir.path().join("photo.png");
        std::fs::write(&image, b"png-bytes").unwrap();

        let args = AddSpaceArgs {
            title: "Sunny Studio".into(),
            price: 1200.0,
            period: Period::Day,
            location: "Koramangala, Bangalore".into(),
            amenities: vec!["WiFi".into(), " ".into(), "Parking".into()],
            image: Some(image),
            at: Some(Coordinates::new(12.9352, 77.6245)),
            ..Default::default()
        };
        let out = exec(&state, Command::AddSpace(args)).await.unwrap();
        let id = out.trim().strip_prefix("Listed space ").unwrap().to_string();

        let space = state.store().find_space(&id).unwrap().unwrap();
        assert_eq!(space.category.as_str(), Category::DEFAULT);
        assert_eq!(space.amenities, vec!["WiFi", "Parking"]);
        assert_eq!(space.image_url, "data:image/png;base64,cG5nLWJ5dGVz");
        assert_eq!(space.owner_email, "meera@example.com");
        assert_eq!(space.views, Some(0));

        let out = exec(&state, Command::Recent { limit: 3 }).await.unwrap();
        assert!(out.lines().next().unwrap().starts_with(&id));
    }

    #[tokio::test]
    async fn test_add_space_rejects_bad_price() {
        let (_dir, state) = state();
        exec(&state, Command::Register(register_args("meera@example.com")))
            .await
            .unwrap();

        let args = AddSpaceArgs {
            title: "Free Desk".into(),
            price: 0.0,
            ..Default::default()
        };
        let result = exec(&state, Command::AddSpace(args)).await;
        assert!(matches!(
            result,
            Err(AppError::Core(nearby_core::Error::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_enquiry_reaches_dashboard() {
        let (_dir, state) = state();
        exec(&state, Command::Register(register_args("meera@example.com")))
            .await
            .unwrap();
        let out = exec(
            &state,
            Command::AddSpace(AddSpaceArgs {
                title: "Sunny Studio".into(),
                price: 1200.0,
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        let id = out.trim().strip_prefix("Listed space ").unwrap().to_string();

        let out = exec(
            &state,
            Command::Enquire(EnquireArgs {
                space: id.clone(),
                name: "Kabir".into(),
                mobile: "9811111111".into(),
                email: "kabir@example.com".into(),
                message: "Is Saturday free?".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(out.trim(), "Enquiry sent to Meera Iyer");

        let mut out: Vec<u8> = Vec::new();
        dashboard(&state, None, &mut StdRng::seed_from_u64(7), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("Dashboard for Meera Iyer\n"));
        assert!(out.contains("Listings: 1  Views: 0  Enquiries: 1  Conversion: 0.0%"));
        assert!(out.contains("Sunny Studio  Kabir <kabir@example.com> 9811111111: Is Saturday free?"));
    }

    #[tokio::test]
    async fn test_dashboard_email_fallback_and_selection() {
        let (_dir, state) = state();
        exec(&state, Command::Register(register_args("priya.sharma@prestige.com")))
            .await
            .unwrap();

        let mut out: Vec<u8> = Vec::new();
        dashboard(&state, None, &mut StdRng::seed_from_u64(1), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Listings: 1  Views: 1245"));
        assert!(out.contains("Skyline Executive Suite"));

        let mut out: Vec<u8> = Vec::new();
        dashboard(
            &state,
            Some("1".into()),
            &mut StdRng::seed_from_u64(1),
            &mut out,
        )
        .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Enquiries: 0"));

        let result = dashboard(
            &state,
            Some("2".into()),
            &mut StdRng::seed_from_u64(1),
            &mut Vec::<u8>::new(),
        );
        assert!(matches!(
            result,
            Err(AppError::Core(nearby_core::Error::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_summary_without_key() {
        let (_dir, state) = state();
        let out = exec(&state, Command::Summary { id: "1".into() }).await.unwrap();
        assert_eq!(out.trim(), nearby_net::summary::MISSING_KEY_SUMMARY);
    }

    #[tokio::test]
    async fn test_status_unconfigured() {
        let (_dir, state) = state();
        let out = exec(&state, Command::Status).await.unwrap();
        assert_eq!(out.trim(), "Remote database: not configured");
    }
}
