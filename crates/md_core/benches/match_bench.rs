use criterion::{black_box, criterion_group, criterion_main, Criterion};
use md_core::{
    Formation, MatchEngine, MatchPlan, Player, PlayerAttributes, Position, Team, TeamTactics,
};

fn bench_team(id: u32, name: &str, id_base: u32) -> Team {
    let mut positions = vec![Position::GK];
    positions.extend([Position::LB, Position::CB, Position::CB, Position::RB]);
    positions.extend([Position::CM, Position::CM, Position::LM, Position::RM]);
    positions.extend([Position::ST, Position::ST]);
    positions.extend([
        Position::GK,
        Position::CB,
        Position::CB,
        Position::CM,
        Position::CM,
        Position::ST,
        Position::ST,
    ]);
    Team {
        id,
        name: name.to_string(),
        formation: Formation::F442,
        players: positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| {
                let mut p = Player::new(id_base + i as u32, format!("{} {}", name, i), pos);
                p.attributes = PlayerAttributes::uniform(60);
                p
            })
            .collect(),
        tactics: TeamTactics::default(),
    }
}

fn full_match(c: &mut Criterion) {
    c.bench_function("simulate_full_match", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let plan = MatchPlan {
                home_team: bench_team(1, "Home", 100),
                away_team: bench_team(2, "Away", 200),
                seed,
            };
            let result = MatchEngine::new(plan).unwrap().simulate();
            black_box(result)
        })
    });
}

criterion_group!(benches, full_match);
criterion_main!(benches);
