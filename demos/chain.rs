use hashchain_csprng::{seed_to_hex, CsprngError, Generator, HashMethod, SEED_LEN};

fn main() -> Result<(), CsprngError> {
    let mut generator = Generator::new([0u8; SEED_LEN]);
    for method in HashMethod::ALL {
        let value = generator.generate(method)?;
        println!("{method:>9}: {value}");
        println!("{:>9}  seed={}", "", seed_to_hex(generator.seed()));
    }

    generator.reseed([0u8; SEED_LEN]);
    let replay = generator.generate(HashMethod::Sha256)?;
    let fresh = Generator::new([0u8; SEED_LEN]).generate(HashMethod::Sha256)?;
    println!("reseed reproduces first output: {}", replay == fresh);
    Ok(())
}
