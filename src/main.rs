use member_search::config::Settings;
use member_search::domain::errors::{RepositoryError, RepositoryResult};
use member_search::domain::member::Member;
use member_search::domain::repositories::{MemberRepository, TeamRepository};
use member_search::domain::search::{Order, Pageable, SearchCondition, Sort, SortProperty};
use member_search::domain::team::Team;
use member_search::infrastructure::database;
use member_search::infrastructure::repositories::{SqliteMemberRepository, SqliteTeamRepository};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let settings = Settings::from_env();

    if let Err(e) = run(&settings).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(settings: &Settings) -> RepositoryResult<()> {
    let pool = database::connect(settings).await?;

    let team_repo = SqliteTeamRepository::new(pool.clone());
    let member_repo = SqliteMemberRepository::new(pool);

    seed_sample_data(&team_repo, &member_repo).await?;

    let condition = SearchCondition::new().age_goe(20).age_loe(30);
    let rows = member_repo.search(&condition).await?;
    tracing::info!("search {:?}: {}", condition, to_json(&rows));

    let pageable =
        Pageable::new(1, 2).with_sort(Sort::by(Order::asc(SortProperty::Username)));
    let page = member_repo
        .search_page(&SearchCondition::new(), &pageable)
        .await?;
    tracing::info!("page {:?}: {}", pageable, to_json(&page));

    for summary in team_repo.age_summaries().await? {
        tracing::info!("{}", summary);
    }

    Ok(())
}

/// Inserts teamA and teamB with two members each, once
async fn seed_sample_data(
    team_repo: &SqliteTeamRepository,
    member_repo: &SqliteMemberRepository,
) -> RepositoryResult<()> {
    if !team_repo.find_all().await?.is_empty() {
        tracing::info!("Sample data already present");
        return Ok(());
    }

    let team_a = Team::new("teamA").map_err(invalid)?;
    let team_b = Team::new("teamB").map_err(invalid)?;
    team_repo.save(&team_a).await?;
    team_repo.save(&team_b).await?;

    for (username, age, team) in [
        ("member1", 10, &team_a),
        ("member2", 20, &team_a),
        ("member3", 30, &team_b),
        ("member4", 40, &team_b),
    ] {
        let member = Member::new(Some(username.to_string()), age, Some(team)).map_err(invalid)?;
        member_repo.save(&member).await?;
    }

    tracing::info!("Seeded sample data");
    Ok(())
}

fn invalid(message: String) -> RepositoryError {
    RepositoryError::InvalidInput(message)
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}
