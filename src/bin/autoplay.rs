use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use twenty48::{
    ai::{Greedy, TileAI},
    GameError, GameSettings, Session,
};

fn main() {
    colog::init();

    let mut args = std::env::args().skip(1);
    let games: u64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(100);
    let seed: u64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(0);

    let ai = Greedy;
    let mut scores = Vec::new();
    for i in 0..games {
        let rng = StdRng::seed_from_u64(seed.wrapping_add(i));
        let mut session = match Session::new(GameSettings::default(), rng) {
            Ok(session) => session,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

        while !session.is_over() {
            let played = ai
                .choose_move(session.game().board())
                .and_then(|direction| session.play(direction));
            match played {
                Ok(_) => {}
                Err(GameError::NoLegalMove) => break,
                Err(e) => {
                    error!("game {}: {}", i, e);
                    break;
                }
            }
        }

        let game = session.game();
        info!(
            "game {}: score {} max tile {} turns {}",
            i,
            game.score(),
            game.board().max_tile(),
            session.turns()
        );
        println!("{}", game.board());

        scores.push(game.score());
    }

    match serde_json::to_string(&scores) {
        Ok(output) => println!("{}", output),
        Err(e) => error!("{}", e),
    }
}
