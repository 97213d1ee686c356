use toruslife::*;

fn main() -> Result<(), Error> {
  env_logger::init();

  let gun = Pattern::parse(GOSPER_GLIDER_GUN, ALIVE_CHAR);
  let mut board = seed_pattern(50, 50, &gun, (0, 0))?;
  for generation in 0..100 {
    if generation % 10 == 0 {
      println!("generation {}, population {}\n{}\n", generation, board.population(), board);
    }
    board = step(&board);
  }

  Ok(())
}
