pub struct Offering {
  pub title: &'static str,
  pub text: &'static str,
}

pub struct AboutPage {
  pub title: &'static str,
  pub tagline: &'static str,
  pub mission: &'static str,
  pub offerings: Vec<Offering>,
}

impl Default for AboutPage {
  fn default() -> Self {
    AboutPage {
      title: "About Movie Review Platform",
      tagline: "Your ultimate destination for movie reviews and recommendations",
      mission: "Movie Review Platform is dedicated to helping movie enthusiasts discover great films, \
                share their opinions, and connect with fellow cinephiles. We believe that everyone has \
                a unique perspective on cinema, and we're here to amplify those voices.",
      offerings: vec![
        Offering {
          title: "Comprehensive Reviews",
          text: "Read detailed reviews from our community of movie lovers, covering everything \
                 from blockbusters to indie gems.",
        },
        Offering {
          title: "Movie Database",
          text: "Browse our extensive collection of movies with detailed information, \
                 ratings, and user reviews.",
        },
        Offering {
          title: "Community Driven",
          text: "Join a vibrant community of film enthusiasts sharing their thoughts \
                 and recommendations.",
        },
        Offering {
          title: "Personal Collections",
          text: "Keep track of your reviews, create watchlists, and manage your personal \
                 movie collection.",
        },
      ],
    }
  }
}
