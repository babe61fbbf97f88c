//! Command handlers; each prints its result as pretty JSON on stdout.

use anyhow::Result;
use serde::Serialize;

use stream_core::Id;
use stream_service::{
    LivecommentService, LivestreamService, ReactionService, ReportService, ServiceContext,
    StatisticsService, UserService,
};

use crate::args::{Commands, LeaderboardSubject};

pub async fn handle(ctx: &ServiceContext, command: Commands) -> Result<()> {
    match command {
        Commands::UserStats { username } => {
            print_json(&StatisticsService::new(ctx).user_statistics(&username).await?)
        }
        Commands::LivestreamStats { livestream_id } => print_json(
            &StatisticsService::new(ctx)
                .livestream_statistics(Id::new(livestream_id))
                .await?,
        ),
        Commands::Livestreams { tag, limit } => print_json(
            &LivestreamService::new(ctx)
                .search_livestreams(tag.as_deref(), limit)
                .await?,
        ),
        Commands::Theme { username } => {
            print_json(&UserService::new(ctx).theme_of(&username).await?)
        }
        Commands::UserLivestreams { username } => print_json(
            &LivestreamService::new(ctx)
                .livestreams_of_user(&username)
                .await?,
        ),
        Commands::Livecomments {
            livestream_id,
            limit,
        } => print_json(
            &LivecommentService::new(ctx)
                .livecomments_for(Id::new(livestream_id), limit)
                .await?,
        ),
        Commands::Reactions {
            livestream_id,
            limit,
        } => print_json(
            &ReactionService::new(ctx)
                .reactions_for(Id::new(livestream_id), limit)
                .await?,
        ),
        Commands::Reports { livestream_id } => print_json(
            &ReportService::new(ctx)
                .reports_for(Id::new(livestream_id))
                .await?,
        ),
        Commands::Tags => print_json(&LivestreamService::new(ctx).all_tags()),
        Commands::Leaderboard { subject, limit } => {
            let statistics = StatisticsService::new(ctx);
            match subject {
                LeaderboardSubject::Users => {
                    print_json(&statistics.user_leaderboard(Some(limit)).await?)
                }
                LeaderboardSubject::Livestreams => {
                    print_json(&statistics.livestream_leaderboard(Some(limit)).await?)
                }
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
