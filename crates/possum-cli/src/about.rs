//! Static about-page content: the model's feature schema, human-readable.

const ABOUT: &str = "\
Possum Population Classifier

Predicts whether a possum specimen belongs to the Victoria (Vic) population
or another population, using a pre-trained gradient-boosted classifier over
biological measurements.

Features used by the model, in training order:
  case       placeholder column, always 0
  site       trapping site (0-7)
  Pop        placeholder column, always 0
  sex        0 = female, 1 = male
  hdlngth    head length
  skullw     skull width
  totlngth   total length
  taill      tail length
  footlgth   foot length
  earconch   ear conch length
  eye        eye width
  chest      chest girth
  belly      belly girth

The column order is fixed by the shipped model artifact and changes only
when the model is retrained.";

pub fn print_about() {
    println!("{ABOUT}");
}
