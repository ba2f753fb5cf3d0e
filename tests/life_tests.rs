use gridlife::sim::Simulation;

fn place(sim: &mut Simulation, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        sim.board_mut().set(x, y, true);
    }
}

#[test]
fn glider_reproduces_itself_shifted() -> anyhow::Result<()> {
    let mut sim = Simulation::new(10, 60)?;

    // A glider with its bounding box anchored at (3, 3):
    //
    //   .#.
    //   ..#
    //   ###
    //
    place(&mut sim, &[(4, 3), (5, 4), (3, 5), (4, 5), (5, 5)]);
    let start = sim.board().to_string();

    for _ in 0..4 {
        sim.tick();
    }

    // four generations later, the same glider sits one cell down and right
    let mut shifted = Simulation::new(10, 60)?;
    place(&mut shifted, &[(5, 4), (6, 5), (4, 6), (5, 6), (6, 6)]);

    assert_ne!(sim.board().to_string(), start);
    assert_eq!(sim.board().to_string(), shifted.board().to_string());

    Ok(())
}

#[test]
fn beehive_is_a_still_life() -> anyhow::Result<()> {
    let mut sim = Simulation::new(8, 60)?;

    //   .##.
    //   #..#
    //   .##.
    //
    place(&mut sim, &[(3, 2), (4, 2), (2, 3), (5, 3), (3, 4), (4, 4)]);
    let before = sim.board().to_string();

    for _ in 0..3 {
        sim.tick();
    }

    assert_eq!(sim.board().to_string(), before);

    Ok(())
}

#[test]
fn blinker_phases() -> anyhow::Result<()> {
    let mut sim = Simulation::new(5, 60)?;
    place(&mut sim, &[(1, 2), (2, 2), (3, 2)]);

    sim.tick();
    insta::assert_snapshot!(sim.board(), @r"
    .....
    ..#..
    ..#..
    ..#..
    .....
    ");

    sim.tick();
    insta::assert_snapshot!(sim.board(), @r"
    .....
    .....
    .###.
    .....
    .....
    ");

    Ok(())
}
