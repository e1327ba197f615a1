//! Static subscription plan content for the Plans view.
//!
//! Pure marketing copy with no logic behind it; the router switches here,
//! nothing else in the session is involved.

pub const PLANS_MD: &str = "\
# Choose Your Cafe Journey

Unlock premium cafe experiences with our carefully crafted subscription
plans. More bookings, better perks, endless discoveries.

## Coffee Explorer

₹299 per month

- 5 free bookings monthly
- Basic cafe recommendations
- Standard support
- Mobile app access

## Cafe Connoisseur (Most Popular)

₹799 per quarter (Save ₹97)

- 20 free bookings quarterly
- Priority cafe access
- Advanced recommendations
- Member-only offers
- Premium support
- Early access to new cafes

## Cafe Champion

₹2,999 per year (Save ₹589)

- Unlimited bookings
- VIP cafe access
- Personalized concierge
- Exclusive events access
- Premium member rewards
- Priority customer support
- Annual cafe tour passes
";
